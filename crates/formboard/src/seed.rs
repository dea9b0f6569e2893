//! Seed data: the stock palette a fresh board starts from.
//!
//! State is process-lifetime only; every run reseeds from this static
//! initial data. The stock setup is a job-application form: a palette of
//! ten ready-made fields and an empty canvas to assemble on.

use crate::field::{Field, FieldKind};
use crate::registry::{Container, ContainerRegistry};

/// Id of the source container new and seeded fields start in.
pub const PALETTE: &str = "palette";

/// Id of the target container the form is assembled in.
pub const CANVAS: &str = "canvas";

/// The stock palette fields, in presentation order.
pub fn seed_fields() -> Vec<Field> {
    vec![
        Field::new(FieldKind::Text, "Full name", "fullName")
            .with_placeholder("Enter your full name")
            .with_required(true),
        Field::new(FieldKind::Checkbox, "Legal Age", "isLegalAge").with_required(true),
        Field::new(FieldKind::Text, "Username", "username").with_placeholder("Choose a username"),
        Field::new(FieldKind::Date, "Birthday", "birthday"),
        Field::new(FieldKind::Email, "Email Address", "email")
            .with_placeholder("your.email@example.com")
            .with_required(true),
        Field::new(FieldKind::Tel, "Phone Number", "phone")
            .with_placeholder("+1 (555) 123-4567"),
        Field::new(FieldKind::Password, "Password", "password").with_required(true),
        Field::new(FieldKind::Select, "Department", "department").with_options([
            "Engineering",
            "Marketing",
            "Sales",
            "Customer Support",
            "Human Resources",
        ]),
        Field::new(FieldKind::TextArea, "Cover Letter", "coverLetter")
            .with_placeholder("Tell us why you're interested in this position..."),
        Field::new(FieldKind::Number, "Years of Experience", "experience")
            .with_range(0.0, 50.0, 1.0),
    ]
}

/// A registry with the seeded palette and an empty canvas.
pub fn seed_registry() -> ContainerRegistry {
    let mut registry = ContainerRegistry::new();
    registry.add_container(Container::with_fields(
        PALETTE,
        "Field Palette",
        seed_fields(),
    ));
    registry.add_container(Container::new(CANVAS, "Form Canvas"));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use formboard_core::ContainerId;

    #[test]
    fn test_seed_shape() {
        let registry = seed_registry();
        let palette = ContainerId::new(PALETTE);
        let canvas = ContainerId::new(CANVAS);

        assert_eq!(registry.ids_of(&palette).len(), 10);
        assert!(registry.ids_of(&canvas).is_empty());
        assert_eq!(registry.containers().len(), 2);
    }

    #[test]
    fn test_seed_ids_unique() {
        let registry = seed_registry();
        let mut ids = registry.ids_of(&ContainerId::new(PALETTE));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_seed_kind_specifics() {
        let registry = seed_registry();
        let palette = registry.container(&ContainerId::new(PALETTE)).unwrap();

        let select = palette
            .fields()
            .iter()
            .find(|f| f.kind == FieldKind::Select)
            .unwrap();
        assert!(matches!(
            select.extra,
            crate::field::FieldExtra::Select { ref options } if options.len() == 5
        ));

        let number = palette
            .fields()
            .iter()
            .find(|f| f.kind == FieldKind::Number)
            .unwrap();
        assert!(matches!(
            number.extra,
            crate::field::FieldExtra::Number { min, max, step }
                if min == 0.0 && max == 50.0 && step == 1.0
        ));
    }
}
