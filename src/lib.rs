pub mod mixfrac_framework {
    pub mod mixfrac_command;
    pub mod mixfrac_input;
    pub mod mixfrac_output;
    pub mod exportable;
    pub mod infoable;
}
pub mod mixfrac_commands {
    pub mod mixfrac_command_format;
    pub mod mixfrac_command_info;
    pub mod mixfrac_command_parse;
    pub mod mixfrac_command_simplify;
    pub mod mixfrac_command_validate;
}
pub mod math {
    pub mod mixed_fraction;
    pub mod mixed_fraction_exact;
    pub mod mixed_fraction_parser;
    pub mod traits;
}
pub mod fraction_field;
pub mod json;

pub use math::mixed_fraction::{MAX_SAFE_INTEGER, MixedFraction, StructuredFraction};
pub use math::mixed_fraction_parser::{ParseError, ParseErrorKind, is_intermediate_input, parse};
