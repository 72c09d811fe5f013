mod contact_inquiry;

pub use contact_inquiry::{ContactInquiry, InquiryValidationError, PhoneNumber};
