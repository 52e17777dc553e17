use std::fmt;

const BOSS_INSTRUCTION: &str = "You are a professional business communication assistant. \
Convert the following text into a formal, concise, and respectful report format suitable \
for a boss. Focus on clarity and conclusions.";

const COLLEAGUE_INSTRUCTION: &str = "You are a professional business communication assistant. \
Convert the following text into a polite, clear, and cooperative message suitable for a \
teammate. Be respectful but less formal than for a boss.";

const CUSTOMER_INSTRUCTION: &str = "You are a professional business communication assistant. \
Convert the following text into a highly polite, service-oriented, and professional message \
suitable for a customer. Use honorifics and emphasize service mindset.";

/// Audience a text is rewritten for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Persona {
    #[default]
    Boss,
    Colleague,
    Customer,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Boss, Persona::Colleague, Persona::Customer];

    /// Resolve a wire label. Labels match exactly; anything else, including
    /// no label at all, falls back to [`Persona::Boss`].
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("colleague") => Persona::Colleague,
            Some("customer") => Persona::Customer,
            _ => Persona::Boss,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Persona::Boss => "boss",
            Persona::Colleague => "colleague",
            Persona::Customer => "customer",
        }
    }

    /// System instruction sent to the completion service for this audience.
    pub fn instruction(self) -> &'static str {
        match self {
            Persona::Boss => BOSS_INSTRUCTION,
            Persona::Colleague => COLLEAGUE_INSTRUCTION,
            Persona::Customer => CUSTOMER_INSTRUCTION,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
