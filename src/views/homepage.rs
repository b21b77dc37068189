use maud::{html, Markup};

use crate::names;

pub enum RegisterState {
    NoError,
    EmptyFields,
    UsernameTaken,
}

pub enum LoginState {
    NoError,
    InvalidCredentials,
}

pub fn landing() -> Markup {
    html! {
        article {
            h1 { "Gain Knowledge" }
            p { "Browse courses, take multiple-choice tests, and track your score." }
            div."landing-actions" {
                a role="button" href=(names::REGISTER_URL) { "Register" }
                a role="button" href=(names::LOGIN_URL) { "Login" }
                a href=(names::CATEGORIES_URL) { "Browse categories" }
            }
        }
    }
}

pub fn register(state: RegisterState) -> Markup {
    html! {
        article {
            h2 { "Create your account" }

            @match state {
                RegisterState::NoError => {}
                RegisterState::EmptyFields => {
                    p."form-error" { "Username and password must not be empty." }
                }
                RegisterState::UsernameTaken => {
                    p."form-error" { "That username is already taken." }
                }
            }

            form method="post" action=(names::REGISTER_URL) {
                label { "Username"
                    input type="text" name="username" required;
                }
                label { "Password"
                    input type="password" name="password" required;
                }
                label { "First name"
                    input type="text" name="first_name" required;
                }
                label { "Last name"
                    input type="text" name="last_name" required;
                }
                label { "Email"
                    input type="email" name="email" required;
                }
                label { "Date of birth"
                    input type="date" name="date_of_birth";
                }
                label { "Gender"
                    select name="gender" {
                        option value="Do not show" selected { "Do not show" }
                        option value="Male" { "Male" }
                        option value="Female" { "Female" }
                    }
                }
                input type="submit" value="Register";
            }

            p { "Already have an account? " a href=(names::LOGIN_URL) { "Login" } }
        }
    }
}

pub fn login(state: LoginState) -> Markup {
    html! {
        article {
            h2 { "Login" }

            @match state {
                LoginState::NoError => {}
                LoginState::InvalidCredentials => {
                    p."form-error" { "Invalid username or password." }
                }
            }

            form method="post" action=(names::LOGIN_URL) {
                label { "Username"
                    input type="text" name="username" required;
                }
                label { "Password"
                    input type="password" name="password" required;
                }
                input type="submit" value="Login";
            }

            p { "No account yet? " a href=(names::REGISTER_URL) { "Register" } }
        }
    }
}
