mod fields;
pub use fields::{ChoiceField, FieldError, PasswordField, TextField};

mod splash;
pub use splash::SplashView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod home;
pub use home::HomeView;
