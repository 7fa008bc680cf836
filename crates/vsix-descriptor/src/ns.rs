//! Namespace URIs of the supported descriptor schemas

/// VSIX package manifest schema (2011).
pub const VSIX_2011: &str = "http://schemas.microsoft.com/developer/vsx-schema/2011";

/// Visual Studio command table schema (2005).
pub const VSCT_2005: &str =
    "http://schemas.microsoft.com/VisualStudio/2005-10-18/CommandTable";
