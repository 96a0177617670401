//! Server-rendered pages for the polls site.

use crate::models::{choice::Choice, question::Question};

pub const EMPTY_INDEX_MESSAGE: &str = "no polls are available.";
pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n",
            "<body>\n{}</body>\n",
            "</html>\n"
        ),
        escape(title),
        body
    )
}

pub fn index(latest_question_list: &[Question]) -> String {
    let body = if latest_question_list.is_empty() {
        format!("<p>{}</p>\n", EMPTY_INDEX_MESSAGE)
    } else {
        let items: String = latest_question_list
            .iter()
            .map(|question| {
                format!(
                    "<li><a href=\"/polls/{}/\">{}</a></li>\n",
                    question.id,
                    escape(&question.question_text)
                )
            })
            .collect();
        format!("<ul>\n{}</ul>\n", items)
    };
    page("Polls", &body)
}

pub fn detail(question: &Question, choices: &[Choice], error_message: Option<&str>) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(&question.question_text));
    if let Some(message) = error_message {
        body.push_str(&format!("<p><strong>{}</strong></p>\n", escape(message)));
    }
    body.push_str(&format!(
        "<form action=\"/polls/{}/vote/\" method=\"post\">\n",
        question.id
    ));
    for choice in choices {
        body.push_str(&format!(
            concat!(
                "<input type=\"radio\" name=\"choice\" id=\"choice{id}\" value=\"{id}\">\n",
                "<label for=\"choice{id}\">{text}</label><br>\n"
            ),
            id = choice.id,
            text = escape(&choice.choice_text)
        ));
    }
    body.push_str("<input type=\"submit\" value=\"Vote\">\n</form>\n");
    page(&question.question_text, &body)
}

pub fn results(question: &Question, choices: &[Choice]) -> String {
    let mut body = format!("<h1>{}</h1>\n<ul>\n", escape(&question.question_text));
    for choice in choices {
        let plural = if choice.votes == 1 { "" } else { "s" };
        body.push_str(&format!(
            "<li>{} -- {} vote{}</li>\n",
            escape(&choice.choice_text),
            choice.votes,
            plural
        ));
    }
    body.push_str(&format!(
        "</ul>\n<a href=\"/polls/{}/\">Vote again?</a>\n",
        question.id
    ));
    page(&question.question_text, &body)
}
