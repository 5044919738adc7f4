mod view;

pub use view::QrScanner;
