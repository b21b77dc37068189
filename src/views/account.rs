use maud::{html, Markup};

use crate::{db::Profile, names};

pub enum ChangePasswordState {
    NoError,
    Success,
    EmptyFields,
    IncorrectPassword,
}

pub fn profile_details(profile: &Profile, is_owner: bool) -> Markup {
    html! {
        article {
            h2 { (profile.first_name) " " (profile.last_name) }
            p { "Email: " (profile.email) }
            @if let Some(dob) = &profile.date_of_birth {
                p { "Date of birth: " (dob) }
            }
            p { "Gender: " (profile.gender) }

            @if is_owner {
                div."profile-actions" {
                    a role="button" href=(names::profile_edit_url(profile.user_id)) { "Edit profile" }
                    a role="button" href=(names::CHANGE_PASSWORD_URL) { "Change password" }
                    form method="post" action=(names::profile_delete_url(profile.user_id)) {
                        input type="submit" value="Delete account" class="danger";
                    }
                }
            }
        }
    }
}

pub fn profile_edit(profile: &Profile) -> Markup {
    html! {
        article {
            h2 { "Edit profile" }

            form method="post" action=(names::profile_edit_url(profile.user_id)) {
                label { "First name"
                    input type="text" name="first_name" value=(profile.first_name) required;
                }
                label { "Last name"
                    input type="text" name="last_name" value=(profile.last_name) required;
                }
                label { "Email"
                    input type="email" name="email" value=(profile.email) required;
                }
                label { "Date of birth"
                    input type="date" name="date_of_birth"
                        value=(profile.date_of_birth.as_deref().unwrap_or(""));
                }
                label { "Gender"
                    select name="gender" {
                        @for gender in ["Do not show", "Male", "Female"] {
                            @if profile.gender == gender {
                                option value=(gender) selected { (gender) }
                            } @else {
                                option value=(gender) { (gender) }
                            }
                        }
                    }
                }
                input type="submit" value="Save";
            }
        }
    }
}

pub fn change_password(state: ChangePasswordState) -> Markup {
    html! {
        article {
            h2 { "Change password" }

            @match state {
                ChangePasswordState::NoError => {}
                ChangePasswordState::Success => {
                    p."form-success" { "Password changed." }
                }
                ChangePasswordState::EmptyFields => {
                    p."form-error" { "New password must not be empty." }
                }
                ChangePasswordState::IncorrectPassword => {
                    p."form-error" { "Current password is incorrect." }
                }
            }

            form method="post" action=(names::CHANGE_PASSWORD_URL) {
                label { "Current password"
                    input type="password" name="current_password" required;
                }
                label { "New password"
                    input type="password" name="new_password" required;
                }
                input type="submit" value="Change password";
            }
        }
    }
}
