//! Wire tokens for the invoice command parameters.
//!
//! Each enum is a closed set and `as_token` is total over it; every variant
//! has exactly one non-empty token.

use serde::{Serialize, Serializer};

/// Delivery channel for the send command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMethod {
    Email,
    Sms,
    Letter,
    EmailLetter,
    SmsLetter,
    EFaktura,
    Edi,
}

impl SendMethod {
    pub fn as_token(self) -> &'static str {
        match self {
            SendMethod::Email => "Email",
            SendMethod::Sms => "SMS",
            SendMethod::Letter => "Letter",
            SendMethod::EmailLetter => "Email+Letter",
            SendMethod::SmsLetter => "SMS+Letter",
            SendMethod::EFaktura => "Efaktura",
            SendMethod::Edi => "EDI",
        }
    }
}

impl Serialize for SendMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

/// Delivery channel for the resend command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendMethod {
    Email,
    Sms,
    Letter,
}

impl ResendMethod {
    pub fn as_token(self) -> &'static str {
        match self {
            ResendMethod::Email => "Email",
            ResendMethod::Sms => "SMS",
            ResendMethod::Letter => "Letter",
        }
    }
}

impl Serialize for ResendMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

/// Delivery channel for the remind command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderMethod {
    Email,
    Sms,
    Letter,
}

impl ReminderMethod {
    pub fn as_token(self) -> &'static str {
        match self {
            ReminderMethod::Email => "Email",
            ReminderMethod::Sms => "SMS",
            ReminderMethod::Letter => "Letter",
        }
    }
}

impl Serialize for ReminderMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

/// How much of the invoice the credit command covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditMode {
    Full,
    Remaining,
    Amount,
    Principal,
    Rest,
}

impl CreditMode {
    pub fn as_token(self) -> &'static str {
        match self {
            CreditMode::Full => "full",
            CreditMode::Remaining => "remaining",
            CreditMode::Amount => "amount",
            CreditMode::Principal => "principal",
            CreditMode::Rest => "rest",
        }
    }
}

impl Serialize for CreditMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}

/// How the customer is notified about a credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditMethod {
    Email,
    Sms,
    Letter,
    EFaktura,
    Edi,
    DoNotNotify,
}

impl CreditMethod {
    pub fn as_token(self) -> &'static str {
        match self {
            CreditMethod::Email => "Email",
            CreditMethod::Sms => "SMS",
            CreditMethod::Letter => "Letter",
            CreditMethod::EFaktura => "Efaktura",
            CreditMethod::Edi => "EDI",
            CreditMethod::DoNotNotify => "DoNotNotify",
        }
    }
}

impl Serialize for CreditMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_token())
    }
}
