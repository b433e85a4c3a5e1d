//! Field ordering
//!
//! Fields, and the choices inside checkbox and radio groups, are sorted
//! ascending by their `order` key. The sort is stable: fields with equal
//! `order` keep the relative position they had in the input.

use super::field::Field;

/// Stable-sort fields by `order`, sorting nested choices first
#[must_use]
pub fn order_fields(mut fields: Vec<Field>) -> Vec<Field> {
    for field in &mut fields {
        match field {
            Field::Checkbox(group) => group.choices.sort_by_key(|choice| choice.order),
            Field::Radio(group) => group.choices.sort_by_key(|choice| choice.order),
            _ => {}
        }
    }
    fields.sort_by_key(Field::order);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::field::{CheckboxChoice, CheckboxGroup, InputField, RadioChoice, RadioGroup};
    use proptest::prelude::*;

    fn named(name: &str, order: i64) -> Field {
        Field::Text(InputField {
            order,
            ..InputField::new(name)
        })
    }

    fn names(fields: &[Field]) -> Vec<String> {
        fields
            .iter()
            .map(|f| match f {
                Field::Text(input) => input.name.clone(),
                other => other.type_name().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_ties_keep_input_order() {
        let fields = vec![named("c", 3), named("a1", 1), named("a2", 1), named("b", 2)];
        assert_eq!(names(&order_fields(fields)), ["a1", "a2", "b", "c"]);
    }

    #[test]
    fn test_negative_orders_first() {
        let fields = vec![named("zero", 0), named("neg", -5)];
        assert_eq!(names(&order_fields(fields)), ["neg", "zero"]);
    }

    #[test]
    fn test_checkbox_choices_sorted() {
        let choice = |label: &str, order| CheckboxChoice {
            label: label.into(),
            order,
            ..CheckboxChoice::default()
        };
        let group = Field::Checkbox(CheckboxGroup {
            choices: vec![choice("last", 9), choice("first", 0), choice("middle", 4)],
            ..CheckboxGroup::default()
        });

        let ordered = order_fields(vec![group]);
        let Field::Checkbox(group) = &ordered[0] else {
            panic!("expected checkbox");
        };
        let labels: Vec<&str> = group.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["first", "middle", "last"]);
    }

    #[test]
    fn test_radio_choices_sorted() {
        let choice = |value: &str, order| RadioChoice {
            value: value.into(),
            order,
            ..RadioChoice::default()
        };
        let group = Field::Radio(RadioGroup {
            choices: vec![choice("l", 2), choice("s", 0), choice("m", 1)],
            ..RadioGroup::default()
        });

        let ordered = order_fields(vec![group]);
        let Field::Radio(group) = &ordered[0] else {
            panic!("expected radio");
        };
        let values: Vec<&str> = group.choices.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["s", "m", "l"]);
    }

    proptest! {
        #[test]
        fn prop_order_is_stable(orders in proptest::collection::vec(-3i64..3, 0..24)) {
            let fields: Vec<Field> = orders
                .iter()
                .enumerate()
                .map(|(i, order)| named(&i.to_string(), *order))
                .collect();

            let mut expected: Vec<(i64, usize)> =
                orders.iter().copied().zip(0..).collect();
            expected.sort_by_key(|(order, _)| *order);
            let expected: Vec<String> = expected.iter().map(|(_, i)| i.to_string()).collect();

            prop_assert_eq!(names(&order_fields(fields)), expected);
        }
    }
}
