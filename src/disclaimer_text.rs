//! Disclaimer Text
//! This module contains the disclaimer copy displayed by the consent gate.

pub const DISCLAIMER_TITLE: &str = "Welcome to Pulse Demo";

pub const DISCLAIMER_BODY: &str =
    "This demo uses AI to simulate or display health-related data.";

pub const DISCLAIMER_NOTICE: &str = "Disclaimer: This is for informational and educational purposes only. It is not medical advice and must not be used for diagnosis or treatment decisions.";

pub const DISCLAIMER_CHECKBOX_LABEL: &str = "I have read and understood the above";

pub const DISCLAIMER_CONFIRM_LABEL: &str = "I Understand";

pub const DISCLAIMER_VERSION: &str = "1.0.0";
