use contracts::system::signup::SignupRequest;
use rand::Rng;
use thiserror::Error;

pub const CAPTCHA_LENGTH: usize = 6;
const CAPTCHA_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Sent with every signup; the form has no input for it
pub const FAVOURITE_GAME: &str = "ludo";
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Input fields of the signup form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    CountryCode,
    Phone,
    Address,
    State,
    Pincode,
    City,
    Password,
    ConfirmPassword,
    CaptchaInput,
}

impl SignupField {
    /// `name` attribute of the input
    pub fn name(self) -> &'static str {
        match self {
            SignupField::FirstName => "firstName",
            SignupField::LastName => "lastName",
            SignupField::Email => "email",
            SignupField::CountryCode => "countryCode",
            SignupField::Phone => "phone",
            SignupField::Address => "address",
            SignupField::State => "state",
            SignupField::Pincode => "Pincode",
            SignupField::City => "city",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
            SignupField::CaptchaInput => "captchaInput",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SignupField::FirstName => "First Name",
            SignupField::LastName => "Last Name",
            SignupField::Email => "Email",
            SignupField::CountryCode => "Code",
            SignupField::Phone => "Phone Number",
            SignupField::Address => "Address",
            SignupField::State => "State",
            SignupField::Pincode => "Pincode",
            SignupField::City => "City",
            SignupField::Password => "Password",
            SignupField::ConfirmPassword => "Confirm Password",
            SignupField::CaptchaInput => "Enter Captcha",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            SignupField::Email => "email",
            SignupField::Phone => "tel",
            SignupField::Pincode => "number",
            SignupField::Password | SignupField::ConfirmPassword => "password",
            _ => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SignupField::FirstName => "John",
            SignupField::LastName => "Doe",
            SignupField::Email => "you@example.com",
            SignupField::CountryCode => DEFAULT_COUNTRY_CODE,
            SignupField::Phone => "9876543210",
            SignupField::Address => "Street, building, flat",
            SignupField::State => "state",
            SignupField::Pincode => "Pincode",
            SignupField::City => "city",
            SignupField::Password | SignupField::ConfirmPassword => "••••••••",
            SignupField::CaptchaInput => "Enter captcha",
        }
    }
}

/// Values typed into the signup form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country_code: String,
    pub phone: String,
    pub address: String,
    pub state: String,
    pub pincode: String,
    pub city: String,
    pub password: String,
    pub confirm_password: String,
    pub captcha_input: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            phone: String::new(),
            address: String::new(),
            state: String::new(),
            pincode: String::new(),
            city: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            captcha_input: String::new(),
        }
    }
}

impl SignupForm {
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::FirstName => &self.first_name,
            SignupField::LastName => &self.last_name,
            SignupField::Email => &self.email,
            SignupField::CountryCode => &self.country_code,
            SignupField::Phone => &self.phone,
            SignupField::Address => &self.address,
            SignupField::State => &self.state,
            SignupField::Pincode => &self.pincode,
            SignupField::City => &self.city,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
            SignupField::CaptchaInput => &self.captcha_input,
        }
    }

    pub fn set(&mut self, field: SignupField, value: String) {
        let slot = match field {
            SignupField::FirstName => &mut self.first_name,
            SignupField::LastName => &mut self.last_name,
            SignupField::Email => &mut self.email,
            SignupField::CountryCode => &mut self.country_code,
            SignupField::Phone => &mut self.phone,
            SignupField::Address => &mut self.address,
            SignupField::State => &mut self.state,
            SignupField::Pincode => &mut self.pincode,
            SignupField::City => &mut self.city,
            SignupField::Password => &mut self.password,
            SignupField::ConfirmPassword => &mut self.confirm_password,
            SignupField::CaptchaInput => &mut self.captcha_input,
        };
        *slot = value;
    }

    /// Payload for the account service. Country code and captcha stay local.
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone.clone(),
            password: self.password.clone(),
            address: self.address.clone(),
            state: self.state.clone(),
            pincode: self.pincode.clone(),
            city: self.city.clone(),
            favourite_game: FAVOURITE_GAME.to_string(),
        }
    }
}

/// Local validation failures. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Invalid captcha!")]
    CaptchaMismatch,
}

/// Form plus the captcha challenge currently on screen.
///
/// The challenge never leaves the browser, so it only deters trivial bots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupState {
    pub form: SignupForm,
    pub captcha: String,
}

impl SignupState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            form: SignupForm::default(),
            captcha: generate_captcha(rng),
        }
    }

    /// New challenge; whatever was typed for the old one is cleared
    pub fn refresh_captcha<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.captcha = generate_captcha(rng);
        self.form.captcha_input.clear();
    }

    /// Password check first, then the captcha (case-sensitive)
    pub fn validate(&self) -> Result<SignupRequest, SignupError> {
        if self.form.password != self.form.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if self.form.captcha_input != self.captcha {
            return Err(SignupError::CaptchaMismatch);
        }
        Ok(self.form.to_request())
    }
}

pub fn generate_captcha<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CAPTCHA_LENGTH)
        .map(|_| CAPTCHA_ALPHABET[rng.gen_range(0..CAPTCHA_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filled_state(captcha: &str) -> SignupState {
        let mut form = SignupForm::default();
        form.first_name = "Asha".into();
        form.last_name = "Rao".into();
        form.email = "asha@example.com".into();
        form.phone = "9876543210".into();
        form.address = "12 Park St".into();
        form.state = "Karnataka".into();
        form.pincode = "560001".into();
        form.city = "Bengaluru".into();
        form.password = "Secret1".into();
        form.confirm_password = "Secret1".into();
        form.captcha_input = captcha.into();
        SignupState {
            form,
            captcha: captcha.into(),
        }
    }

    #[test]
    fn test_captcha_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = generate_captcha(&mut rng);
            assert_eq!(code.len(), CAPTCHA_LENGTH);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_refresh_captcha_clears_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = SignupState::new(&mut rng);
        state.form.captcha_input = "WHATEVER".into();
        state.form.first_name = "Asha".into();

        state.refresh_captcha(&mut rng);

        assert_eq!(state.captcha.len(), CAPTCHA_LENGTH);
        assert!(state.form.captcha_input.is_empty());
        assert_eq!(state.form.first_name, "Asha");
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut state = filled_state("AB12CD");
        state.form.password = "Secret1".into();
        state.form.confirm_password = "Secret2".into();
        assert_eq!(state.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_password_checked_before_captcha() {
        let mut state = filled_state("AB12CD");
        state.form.confirm_password = "Secret2".into();
        state.form.captcha_input = "nope".into();
        assert_eq!(state.validate(), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_captcha_is_case_sensitive() {
        let mut state = filled_state("AB12CD");
        state.form.captcha_input = "ab12cd".into();
        assert_eq!(state.validate(), Err(SignupError::CaptchaMismatch));
    }

    #[test]
    fn test_valid_form_builds_request() {
        let state = filled_state("AB12CD");
        let request = state.validate().unwrap();
        assert_eq!(request.first_name, "Asha");
        assert_eq!(request.phone_number, "9876543210");
        assert_eq!(request.pincode, "560001");
        assert_eq!(request.favourite_game, FAVOURITE_GAME);
    }

    #[test]
    fn test_set_touches_only_its_field() {
        let mut form = SignupForm::default();
        form.set(SignupField::Pincode, "110001".into());
        form.set(SignupField::Phone, "12345".into());
        assert_eq!(form.get(SignupField::City), "");
        assert_eq!(form.get(SignupField::Pincode), "110001");
        assert_eq!(form.get(SignupField::Phone), "12345");
        assert_eq!(form.get(SignupField::CountryCode), DEFAULT_COUNTRY_CODE);
    }
}
