pub mod builder;
pub mod error;
pub mod factory;
pub mod fields;
pub mod identity;
pub mod kind;
pub mod masking;
pub mod resolver;
pub mod template;
pub mod templates;
pub mod value;

// Re-export commonly used types
pub use builder::DiagnosticFieldBuilder;
pub use error::{ContractError, ErrorKind, UsageError};
pub use factory::{ContractErrorFactory, ErrorFactory};
pub use fields::{names, DiagnosticFields};
pub use identity::{extract_parameter_name, parameter_name_from_expression};
pub use kind::RequirementKind;
pub use masking::{TransformRegistry, ValueMasker, ValueTransform};
pub use resolver::{resolve_factory, select_factory, ViolationClass};
pub use template::render;
pub use value::FieldValue;
