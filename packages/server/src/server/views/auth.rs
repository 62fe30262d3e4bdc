use crate::common::utils::escape;

use super::{notice, text_input};

pub fn login_form(email: &str, next: Option<&str>, message: Option<&str>) -> String {
    let next = next
        .map(|n| format!(r#"<input type="hidden" name="next" value="{}">"#, escape(n)))
        .unwrap_or_default();
    format!(
        r#"{notice}<form method="post" action="/login" class="login">{next}{email}<p><label for="password">Password</label> <input type="password" id="password" name="password"></p><p><button type="submit">Log in</button></p></form>"#,
        notice = notice(message),
        email = text_input("email", "Email", email, None),
    )
}

pub fn register_form(email: &str, message: Option<&str>) -> String {
    format!(
        r#"{notice}<form method="post" action="/register" class="register">{email}<p><label for="password">Password</label> <input type="password" id="password" name="password"></p><p><button type="submit">Register</button></p></form>"#,
        notice = notice(message),
        email = text_input("email", "Email", email, None),
    )
}
