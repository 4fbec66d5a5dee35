//! Login form state
//!
//! Temporary input fields for the Login screen. Values live here until the
//! Continue action commits them into the persisted profile; swiping away
//! without committing discards nothing permanent.

use super::profile::UserProfile;

/// Youngest selectable age on the wheel picker.
pub const AGE_MIN: u16 = 18;
/// Oldest selectable age on the wheel picker.
pub const AGE_MAX: u16 = 100;

/// Which login field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Name,
    Age,
    Phone,
}

impl LoginField {
    /// Cycle focus downward (Tab / Down past the age wheel).
    pub fn next(self) -> Self {
        match self {
            LoginField::Name => LoginField::Age,
            LoginField::Age => LoginField::Phone,
            LoginField::Phone => LoginField::Name,
        }
    }

    /// Cycle focus upward.
    pub fn prev(self) -> Self {
        match self {
            LoginField::Name => LoginField::Phone,
            LoginField::Age => LoginField::Name,
            LoginField::Phone => LoginField::Age,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginField::Name => "Name",
            LoginField::Age => "Age",
            LoginField::Phone => "Phone Number",
        }
    }
}

/// Uncommitted login input.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub name: String,
    pub age: u16,
    pub phone: String,
    pub focus: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: AGE_MIN,
            phone: String::new(),
            focus: LoginField::default(),
        }
    }
}

impl LoginForm {
    /// Seed the form from a previously persisted profile so a returning
    /// user sees their saved values instead of blanks.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let age = profile
            .age
            .parse::<u16>()
            .unwrap_or(AGE_MIN)
            .clamp(AGE_MIN, AGE_MAX);
        Self {
            name: profile.name.clone(),
            age,
            phone: profile.phone.clone(),
            focus: LoginField::default(),
        }
    }

    /// Type a character into the focused text field. The age wheel ignores
    /// typed characters; it is stepped with `age_up`/`age_down`.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            LoginField::Name => self.name.push(c),
            LoginField::Phone => self.phone.push(c),
            LoginField::Age => {}
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            LoginField::Name => {
                self.name.pop();
            }
            LoginField::Phone => {
                self.phone.pop();
            }
            LoginField::Age => {}
        }
    }

    pub fn age_up(&mut self) {
        if self.age < AGE_MAX {
            self.age += 1;
        }
    }

    pub fn age_down(&mut self) {
        if self.age > AGE_MIN {
            self.age -= 1;
        }
    }

    /// Snapshot the form as a profile ready to commit.
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            age: self.age.to_string(),
            phone: self.phone.clone(),
        }
    }
}
