pub mod ids;
pub mod contact;
pub mod selection;

// Re-exports for convenience
pub use ids::Id;
pub use contact::{
    display_name, BirthDate, ContactRecord, EmailEntry, PhoneEntry, PostalAddress,
    UNNAMED_CONTACT,
};
pub use selection::SelectionSet;
