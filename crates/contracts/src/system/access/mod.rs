//! Who may see and change what.
//!
//! [`policy`] is the single authorization table; [`nav`] holds the static
//! menu definitions it is expressed against.

pub mod nav;
pub mod policy;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use nav::{compose_nav, NavEntry, RESIDENT_NAV, STAFF_NAV};
pub use policy::{allowed_nav, can_access, can_mutate, can_perform};

/// Every routed page of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    Dashboard,
    HealthCenter,
    Sanitation,
    Immunization,
    Wastewater,
    Surveillance,
    Users,
    Settings,
    ResidentHome,
    ResidentHealth,
    ResidentQrCode,
    ResidentPermits,
    ResidentComplaints,
    ResidentRequest,
}

impl PageKey {
    pub const ALL: [PageKey; 14] = [
        PageKey::Dashboard,
        PageKey::HealthCenter,
        PageKey::Sanitation,
        PageKey::Immunization,
        PageKey::Wastewater,
        PageKey::Surveillance,
        PageKey::Users,
        PageKey::Settings,
        PageKey::ResidentHome,
        PageKey::ResidentHealth,
        PageKey::ResidentQrCode,
        PageKey::ResidentPermits,
        PageKey::ResidentComplaints,
        PageKey::ResidentRequest,
    ];

    pub fn path(self) -> &'static str {
        match self {
            PageKey::Dashboard => "/dashboard",
            PageKey::HealthCenter => "/health-center",
            PageKey::Sanitation => "/sanitation",
            PageKey::Immunization => "/immunization",
            PageKey::Wastewater => "/wastewater",
            PageKey::Surveillance => "/surveillance",
            PageKey::Users => "/users",
            PageKey::Settings => "/settings",
            PageKey::ResidentHome => "/resident",
            PageKey::ResidentHealth => "/resident/health",
            PageKey::ResidentQrCode => "/resident/qrcode",
            PageKey::ResidentPermits => "/resident/permits",
            PageKey::ResidentComplaints => "/resident/complaints",
            PageKey::ResidentRequest => "/resident/request",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageKey::Dashboard => "Dashboard",
            PageKey::HealthCenter => "Health Center Services",
            PageKey::Sanitation => "Sanitation & Permits",
            PageKey::Immunization => "Immunization & Nutrition",
            PageKey::Wastewater => "Wastewater & Septic Services",
            PageKey::Surveillance => "Health Surveillance System",
            PageKey::Users => "User Management",
            PageKey::Settings => "Settings",
            PageKey::ResidentHome => "Resident Portal",
            PageKey::ResidentHealth => "My Family's Health",
            PageKey::ResidentQrCode => "My QR Code",
            PageKey::ResidentPermits => "My Business Permits",
            PageKey::ResidentComplaints => "My Complaints",
            PageKey::ResidentRequest => "File a Request",
        }
    }

    /// Explanation shown on the Access Restricted view.
    pub fn restriction_notice(self) -> &'static str {
        match self {
            PageKey::Surveillance => {
                "You do not have permission to access the Health Surveillance System. \
                 This module is only available to Clerks, Captains, and System Administrators."
            }
            PageKey::Users => "Only System Administrators can access User Management.",
            PageKey::ResidentHome
            | PageKey::ResidentHealth
            | PageKey::ResidentQrCode
            | PageKey::ResidentPermits
            | PageKey::ResidentComplaints
            | PageKey::ResidentRequest => "This page is part of the resident self-service portal.",
            PageKey::Dashboard
            | PageKey::HealthCenter
            | PageKey::Sanitation
            | PageKey::Immunization
            | PageKey::Wastewater
            | PageKey::Settings => "Your role does not have access to this module.",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Capabilities checked on top of a page's mutate flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    StartInspection,
    ScanBusinessQr,
    ScanResidentQr,
    CreatePatient,
    RecordVaccination,
    ScheduleSmsReminder,
    CreatePermit,
    IssueViolation,
    FileWastewaterComplaint,
    ScheduleService,
    GenerateReport,
    ManageOutbreakAlerts,
    ViewHealthIndex,
    ManageUsers,
    SavePreferences,
    FileRequest,
    FileComplaint,
}

impl Action {
    pub const ALL: [Action; 17] = [
        Action::StartInspection,
        Action::ScanBusinessQr,
        Action::ScanResidentQr,
        Action::CreatePatient,
        Action::RecordVaccination,
        Action::ScheduleSmsReminder,
        Action::CreatePermit,
        Action::IssueViolation,
        Action::FileWastewaterComplaint,
        Action::ScheduleService,
        Action::GenerateReport,
        Action::ManageOutbreakAlerts,
        Action::ViewHealthIndex,
        Action::ManageUsers,
        Action::SavePreferences,
        Action::FileRequest,
        Action::FileComplaint,
    ];

    /// Page whose mutate flag must also hold for this action. `None` marks
    /// actions that change no page data (viewing the index, personal
    /// preferences, resident self-service filings).
    pub fn target_page(self) -> Option<PageKey> {
        match self {
            Action::StartInspection
            | Action::ScanBusinessQr
            | Action::CreatePermit
            | Action::IssueViolation => Some(PageKey::Sanitation),
            Action::ScanResidentQr | Action::CreatePatient => Some(PageKey::HealthCenter),
            Action::RecordVaccination | Action::ScheduleSmsReminder | Action::GenerateReport => {
                Some(PageKey::Immunization)
            }
            Action::FileWastewaterComplaint | Action::ScheduleService => Some(PageKey::Wastewater),
            Action::ManageOutbreakAlerts => Some(PageKey::Surveillance),
            Action::ManageUsers => Some(PageKey::Users),
            Action::ViewHealthIndex
            | Action::SavePreferences
            | Action::FileRequest
            | Action::FileComplaint => None,
        }
    }

    pub fn is_mutation(self) -> bool {
        self.target_page().is_some()
    }
}
