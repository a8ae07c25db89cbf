use uuid::Uuid;

/// Entities addressed by a UUID.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// One-line label for menus and log fields.
pub trait Displayable {
    fn display_label(&self) -> String;
}
