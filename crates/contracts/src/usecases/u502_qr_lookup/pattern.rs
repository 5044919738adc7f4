//! Deterministic placeholder QR matrix for a printed id. Not scannable;
//! it only has to look like a QR code and be stable per id.

pub const QR_SIZE: usize = 21;

pub type QrPattern = [[bool; QR_SIZE]; QR_SIZE];

/// Id printed on a resident's card: `RES-` and the first eight characters
/// of the upper-cased name with whitespace turned into hyphens.
pub fn resident_qr_id(name: &str) -> String {
    if name.is_empty() {
        return "RES-001".to_string();
    }
    let slug: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(8)
        .collect();
    format!("RES-{}", slug)
}

fn in_finder(i: usize, j: usize) -> bool {
    let far = QR_SIZE - 7;
    (i < 7 && j < 7) || (i < 7 && j >= far) || (i >= far && j < 7)
}

fn finder_cell(i: usize, j: usize) -> bool {
    let n = QR_SIZE;
    let ring = i == 0 || i == 6 || j == 0 || j == 6 || j == n - 1 || j == n - 7 || i == n - 1 || i == n - 7;
    let eye = |rows: (usize, usize), cols: (usize, usize)| {
        (rows.0..=rows.1).contains(&i) && (cols.0..=cols.1).contains(&j)
    };
    ring || eye((2, 4), (2, 4)) || eye((2, 4), (n - 5, n - 3)) || eye((n - 5, n - 3), (2, 4))
}

pub fn qr_pattern(code: &str) -> QrPattern {
    let units: Vec<u16> = code.encode_utf16().collect();
    let mut pattern = [[false; QR_SIZE]; QR_SIZE];
    for (i, row) in pattern.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = if in_finder(i, j) {
                finder_cell(i, j)
            } else if units.is_empty() {
                false
            } else {
                (usize::from(units[i % units.len()]) + j * 17) % 3 != 2
            };
        }
    }
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resident_qr_id() {
        assert_eq!(resident_qr_id("Juan Dela Cruz"), "RES-JUAN-DEL");
        assert_eq!(resident_qr_id("Ana"), "RES-ANA");
        assert_eq!(resident_qr_id(""), "RES-001");
    }

    #[test]
    fn test_pattern_is_deterministic() {
        assert_eq!(qr_pattern("RES-JUAN-DEL"), qr_pattern("RES-JUAN-DEL"));
        assert_ne!(qr_pattern("RES-JUAN-DEL"), qr_pattern("BUS-001"));
    }

    #[test]
    fn test_finder_patterns_in_corners() {
        let p = qr_pattern("RES-001");
        for (r, c) in [(0, 0), (6, 6), (3, 3), (0, 20), (3, 16), (20, 0), (16, 3)] {
            assert!(p[r][c], "expected dark module at {r},{c}");
        }
        for (r, c) in [(1, 1), (5, 5), (1, 15), (19, 1)] {
            assert!(!p[r][c], "expected light module at {r},{c}");
        }
    }

    #[test]
    fn test_data_cells_follow_code() {
        let p = qr_pattern("A");
        // 'A' is 65; (65 + 17 j) % 3 == 2 exactly when j % 3 == 0.
        assert!(!p[10][9]);
        assert!(p[10][10]);
        assert!(p[10][11]);
    }
}
