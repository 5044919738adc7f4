pub mod aggregate;
pub mod timbang;

pub use aggregate::{
    NutritionRecord, SmsReminder, VaccineRecord, NUTRITION_RECORDS, NUTRITION_STATUS,
    SMS_REMINDERS, VACCINATION_TREND, VACCINE_RECORDS,
};
pub use timbang::{TimbangSchedule, TimbangSlot, TimbangStatus};
