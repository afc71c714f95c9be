//! HTML rendering of the form page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::session::{NotificationLevel, Session};
use super::state::AppState;

const STYLE: &str = "
body { font-family: sans-serif; margin: 20px; }
.layout { display: flex; gap: 40px; align-items: flex-start; }
table { border-collapse: collapse; }
th, td { border-bottom: 1px solid #ddd; padding: 4px 12px; text-align: left; }
td.count { text-align: center; }
.input-stack { display: flex; flex-direction: column; gap: 15px; align-items: flex-start; }
.input-label { font-size: 1.4em; text-decoration: underline; }
.analyze-button { background-color: #ff0000; color: white; border: none; padding: 6px 12px; border-radius: 4px; }
.notification { padding: 8px 12px; border-radius: 4px; margin-bottom: 12px; }
.notification.success { background-color: #e3f6e5; }
.notification.error { background-color: #fde2e2; }
";

/// Render the whole page for `session`.
pub fn render_page(session: &Session, state: &AppState) -> Markup {
    let language = state.language;
    let labels = language.labels();

    html! {
        (DOCTYPE)
        html lang=(language.code()) {
            head {
                meta charset="utf-8";
                title { (language.page_title()) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (language.page_title()) }
                h2 { (language.page_heading()) }
                @for notification in &session.notifications {
                    @let level = match notification.level {
                        NotificationLevel::Success => "success",
                        NotificationLevel::Error => "error",
                    };
                    div class={ "notification " (level) } { (notification.message) }
                }
                div.layout {
                    table {
                        thead {
                            tr {
                                th { (labels.weekday_header) }
                                th { (labels.count_header) }
                                th { (labels.holidays_header) }
                            }
                        }
                        tbody {
                            @for row in &session.rows {
                                tr {
                                    td { (row.label) }
                                    td.count { (row.count) }
                                    td { (row.holiday_list()) }
                                }
                            }
                        }
                    }
                    form.input-stack method="get" action="/" {
                        label.input-label for="year" {
                            (language.year_input_label(state.years.min, state.years.max))
                        }
                        input id="year" name="year" value=(session.selected_year);
                        button.analyze-button type="submit" { (language.analyze_button()) }
                    }
                }
            }
        }
    }
}
