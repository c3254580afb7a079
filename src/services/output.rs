use crate::domain::models::{GateMessage, GateReport, Level};

fn prefix(level: Level) -> &'static str {
    match level {
        Level::Info => "info:",
        Level::Pass => "ok:",
        Level::Warn => "warning:",
        Level::Fail => "error:",
    }
}

pub fn render_message(msg: &GateMessage) -> String {
    format!("{} {}", prefix(msg.level), msg.text)
}

pub fn print_report(report: &GateReport) {
    for msg in &report.messages {
        println!("{}", render_message(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::render_message;
    use crate::domain::models::{GateMessage, Level};

    #[test]
    fn messages_are_prefixed_by_level() {
        let msg = GateMessage {
            level: Level::Fail,
            text: "gitleaks reported issues".to_string(),
        };
        assert_eq!(render_message(&msg), "error: gitleaks reported issues");
        let msg = GateMessage {
            level: Level::Pass,
            text: "all governance gate checks passed".to_string(),
        };
        assert_eq!(render_message(&msg), "ok: all governance gate checks passed");
    }
}
