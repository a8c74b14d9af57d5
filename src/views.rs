//! Server-rendered HTML for the survey page and the confirmation page.

use std::fmt::Write;

use crate::models::form::{SurveyDraft, SurveyField};
use crate::services::form_session::FormSession;

pub const PAGE_TITLE: &str = "Chào mừng bạn đến với Cộng đồng N ơi!";
pub const EMAIL_ERROR_MESSAGE: &str = "Vui lòng nhập một địa chỉ email hợp lệ.";
pub const SUCCESS_HEADING: &str = "Cảm ơn bạn đã đăng ký!";
pub const SUCCESS_MESSAGE: &str =
    "Thông tin đã được gửi thành công. Chào mừng bạn đến với cộng đồng N ơi!";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Đã có lỗi xảy ra, vui lòng thử lại sau.";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #fafafa; color: #18181b; margin: 0; }
.container { max-width: 42rem; margin: 0 auto; padding: 4rem 1rem; }
header { text-align: center; margin-bottom: 3rem; }
.card { background: #fff; padding: 2.5rem; border-radius: 1rem; border: 1px solid #e4e4e7; }
.question { margin-bottom: 2.25rem; }
.question > label, .question > .label { display: block; font-weight: 500; margin-bottom: .5rem; }
input[type=email], input[type=text], input[type=tel], textarea {
  width: 100%; box-sizing: border-box; padding: .625rem 1rem; border: 1px solid #e4e4e7; border-radius: .5rem;
}
.invalid { border-color: #ef4444 !important; }
.error { color: #ef4444; font-size: .875rem; margin-top: .5rem; }
.error[hidden] { display: none; }
.radio { display: flex; align-items: center; padding: .875rem; border: 1px solid #e4e4e7; border-radius: .5rem; margin-bottom: .625rem; cursor: pointer; }
.radio input { margin-right: .75rem; }
.optional, .required { font-weight: 400; }
.optional { color: #a1a1aa; }
.required { color: #ef4444; }
button { width: 100%; background: #2563eb; color: #fff; font-weight: 600; padding: .875rem 1.5rem; border: 0; border-radius: .5rem; cursor: pointer; }
.success { text-align: center; margin-top: 2.5rem; }
"#;

// Live check: ask the server on every keystroke and toggle the inline error.
// Replies for text no longer in the field are dropped.
const LIVE_EMAIL_CHECK: &str = r#"
(function () {
  var input = document.getElementById('email');
  var error = document.getElementById('email-error');
  input.addEventListener('input', function () {
    var sent = input.value;
    fetch('/api/validate-email', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ email: sent })
    })
      .then(function (res) { return res.json(); })
      .then(function (body) {
        if (input.value !== sent) { return; }
        error.hidden = !body.show_error;
        input.classList.toggle('invalid', body.show_error);
      })
      .catch(function () {});
  });
})();
"#;

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"vi\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <div class=\"container\">\n{body}</div>\n</body>\n</html>\n",
        title = PAGE_TITLE,
        style = STYLE,
        body = body,
    )
}

fn question_label(field: SurveyField) -> &'static str {
    match field {
        SurveyField::Email => "Email của bạn",
        SurveyField::WatchDuration => "1. Bạn đã xem video của NhiLe được bao lâu rồi?",
        SurveyField::Platform => "2. Bạn thường xem trên nền tảng nào nhất?",
        SurveyField::CommunityNeed => "3. Nhu cầu lớn nhất của bạn khi tham gia cộng đồng là gì?",
        SurveyField::Profession => "4. Bạn đang làm việc trong ngành nghề/lĩnh vực nào?",
        SurveyField::MaritalStatus => "5. Tình trạng hôn nhân?",
        SurveyField::Gender => "6. Giới tính của bạn?",
        SurveyField::Location => "7. Bạn đang sinh sống ở đâu?",
        SurveyField::Phone => "8. Số điện thoại",
        SurveyField::Telegram => "9. Username Telegram",
    }
}

fn placeholder(field: SurveyField) -> &'static str {
    match field {
        SurveyField::Email => "vidu@email.com",
        SurveyField::CommunityNeed => {
            "Ví dụ: Học hỏi kiến thức, tìm kiếm sự hỗ trợ, kết nối bạn bè..."
        }
        SurveyField::Profession => "Ví dụ: Công nghệ thông tin, Marketing, Sinh viên...",
        SurveyField::Location => "Ví dụ: Hà Nội, Việt Nam hoặc Paris, Pháp",
        SurveyField::Phone => "09xxxxxxxx",
        SurveyField::Telegram => "@username_cua_ban",
        _ => "",
    }
}

fn render_email(out: &mut String, draft: &SurveyDraft, email_error: bool) {
    let name = SurveyField::Email.name();
    let _ = write!(
        out,
        "<div class=\"question\">\n<label for=\"{name}\">{label} <span class=\"required\">*</span></label>\n\
         <input type=\"email\" id=\"{name}\" name=\"{name}\" required placeholder=\"{placeholder}\" \
         value=\"{value}\"{class}>\n\
         <p id=\"email-error\" class=\"error\"{hidden}>{message}</p>\n</div>\n",
        label = question_label(SurveyField::Email),
        placeholder = placeholder(SurveyField::Email),
        value = escape_html(&draft.email),
        class = if email_error { " class=\"invalid\"" } else { "" },
        hidden = if email_error { "" } else { " hidden" },
        message = EMAIL_ERROR_MESSAGE,
    );
}

fn render_choice(out: &mut String, draft: &SurveyDraft, field: SurveyField) {
    let name = field.name();
    let selected = draft.get(field);
    let _ = write!(
        out,
        "<div class=\"question\">\n<span class=\"label\">{}</span>\n",
        question_label(field)
    );
    for option in field.options().unwrap_or_default() {
        let _ = write!(
            out,
            "<label class=\"radio\"><input type=\"radio\" name=\"{name}\" value=\"{value}\"{checked}>{label}</label>\n",
            value = option.value,
            checked = if option.value == selected { " checked" } else { "" },
            label = option.label,
        );
    }
    out.push_str("</div>\n");
}

fn render_text(out: &mut String, draft: &SurveyDraft, field: SurveyField) {
    let name = field.name();
    let value = escape_html(draft.get(field));
    let optional = matches!(field, SurveyField::Phone | SurveyField::Telegram);
    let _ = write!(
        out,
        "<div class=\"question\">\n<label for=\"{name}\">{label}{optional}</label>\n",
        label = question_label(field),
        optional = if optional {
            " <span class=\"optional\">(Không bắt buộc)</span>"
        } else {
            ""
        },
    );
    let _ = match field {
        SurveyField::CommunityNeed => write!(
            out,
            "<textarea id=\"{name}\" name=\"{name}\" rows=\"4\" placeholder=\"{placeholder}\">{value}</textarea>\n",
            placeholder = placeholder(field),
        ),
        _ => write!(
            out,
            "<input type=\"{kind}\" id=\"{name}\" name=\"{name}\" placeholder=\"{placeholder}\" value=\"{value}\">\n",
            kind = if field == SurveyField::Phone { "tel" } else { "text" },
            placeholder = placeholder(field),
        ),
    };
    out.push_str("</div>\n");
}

/// The survey page for a session that is still being edited.
pub fn render_form(session: &FormSession) -> String {
    let draft = session.draft();
    let mut body = String::new();

    let _ = write!(
        body,
        "<header>\n<h1>{}</h1>\n<p>Vui lòng dành vài phút chia sẻ thông tin. \
         Điều này sẽ giúp chúng mình hiểu và hỗ trợ bạn tốt hơn.</p>\n</header>\n\
         <div class=\"card\">\n<form method=\"post\" action=\"/\">\n",
        PAGE_TITLE
    );

    for field in SurveyField::ALL {
        match field {
            SurveyField::Email => render_email(&mut body, draft, session.email_error()),
            field if field.is_choice() => render_choice(&mut body, draft, field),
            field => render_text(&mut body, draft, field),
        }
    }

    let _ = write!(
        body,
        "<button type=\"submit\">Hoàn tất &amp; Gửi thông tin</button>\n</form>\n</div>\n\
         <script>{}</script>\n",
        LIVE_EMAIL_CHECK
    );

    page(&body)
}

/// The confirmation shown once a submission is accepted.
pub fn render_success() -> String {
    page(&format!(
        "<div class=\"success\">\n<h2>{}</h2>\n<p>{}</p>\n</div>\n",
        SUCCESS_HEADING, SUCCESS_MESSAGE
    ))
}
