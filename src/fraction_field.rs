use crate::math::{
    mixed_fraction::MixedFraction,
    mixed_fraction_parser::{self, ParseErrorKind},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text is not yet an attempt at a fraction; nothing changed.
    Intermediate,
    Accepted(MixedFraction),
    /// The previous value is kept and the warning is set.
    Rejected(ParseErrorKind),
}

/**
 * An input field that edits one fraction.
 *
 * The field always holds the most recent value that parsed successfully. A failed edit leaves that value in place and
 * surfaces the parse message as a warning, until a later edit succeeds.
 */
#[derive(Clone, Debug)]
pub struct FractionField {
    value: MixedFraction,
    raw_text: String,
    warning: Option<&'static str>,
}

impl FractionField {
    pub fn new(initial: MixedFraction) -> Self {
        Self {
            raw_text: initial.to_string(),
            value: initial,
            warning: None,
        }
    }

    pub fn edit(&mut self, raw: &str) -> EditOutcome {
        self.raw_text = raw.to_string();

        if mixed_fraction_parser::is_intermediate_input(raw) {
            log::debug!("intermediate input {:?}", raw);
            return EditOutcome::Intermediate;
        }

        match mixed_fraction_parser::parse(raw) {
            Ok(value) => {
                log::debug!("accepted {:?} as {}", raw, value);
                self.value = value;
                self.warning = None;
                EditOutcome::Accepted(value)
            }
            Err(error) => {
                log::debug!("rejected {:?}: {}", raw, error);
                self.warning = Some(error.message());
                EditOutcome::Rejected(error.kind())
            }
        }
    }

    pub fn value(&self) -> &MixedFraction {
        &self.value
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning
    }
}

impl Default for FractionField {
    fn default() -> Self {
        Self::new(MixedFraction::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        fraction_field::{EditOutcome, FractionField},
        math::{mixed_fraction::MixedFraction, mixed_fraction_parser::ParseErrorKind},
    };

    #[test]
    fn field_initial() {
        let initial: MixedFraction = "-3 1/2".parse().unwrap();
        let field = FractionField::new(initial);
        assert_eq!(field.raw_text(), "-3 1/2");
        assert_eq!(field.value(), &initial);
        assert!(field.warning().is_none());
    }

    #[test]
    fn field_keeps_value_on_rejection() {
        let mut field = FractionField::default();

        assert!(matches!(field.edit("1/2"), EditOutcome::Accepted(_)));
        assert_eq!(
            field.edit("1/0"),
            EditOutcome::Rejected(ParseErrorKind::InvalidDenominator)
        );
        assert_eq!(field.value().to_string(), "1/2");
        assert_eq!(field.raw_text(), "1/0");
        assert_eq!(field.warning(), Some(ParseErrorKind::InvalidDenominator.message()));

        assert!(matches!(field.edit("3 1/4"), EditOutcome::Accepted(_)));
        assert_eq!(field.value().to_string(), "3 1/4");
        assert!(field.warning().is_none());
    }

    #[test]
    fn field_ignores_intermediate() {
        let mut field = FractionField::default();

        assert_eq!(field.edit("abc"), EditOutcome::Rejected(ParseErrorKind::InvalidFormat));
        let warning = field.warning().map(str::to_string);

        //typing a minus sign neither sets nor clears the warning
        assert_eq!(field.edit(" - "), EditOutcome::Intermediate);
        assert_eq!(field.warning().map(str::to_string), warning);
        assert_eq!(field.edit(""), EditOutcome::Intermediate);
        assert_eq!(field.warning().map(str::to_string), warning);
        assert_eq!(field.value().to_string(), "0");

        assert!(matches!(field.edit("-2"), EditOutcome::Accepted(_)));
        assert!(field.warning().is_none());
    }
}
