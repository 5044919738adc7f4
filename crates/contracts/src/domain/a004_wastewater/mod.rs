pub mod aggregate;

pub use aggregate::{
    Complaint, Priority, ServiceRecord, ServiceSchedule, COMPLAINTS, SCHEDULES, SERVICE_TRACKING,
};
