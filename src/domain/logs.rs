use serde::Serialize;

const ESC: char = '\x1b';

/// Recent output of the monitored container, ANSI sequences removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContainerLogText(pub String);

impl ContainerLogText {
    pub fn from_raw(raw: &str) -> Self {
        Self(strip_ansi(raw))
    }
}

/// Tail of the host's system log files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HostLogText(pub String);

/// Payload of the logs endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogBundle {
    pub ec2: HostLogText,
    pub docker: ContainerLogText,
}

/// Remove every `ESC ... m` run. An escape with no terminating `m` is kept verbatim.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(ESC) {
        out.push_str(&rest[..start]);
        let after_esc = &rest[start + ESC.len_utf8()..];

        match after_esc.find('m') {
            Some(end) => rest = &after_esc[end + 1..],
            None => {
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_color_codes() {
        assert_eq!(strip_ansi("\x1b[31merror\x1b[0m"), "error");
    }

    #[test]
    fn test_strip_keeps_plain_text() {
        let plain = "GET /api/teams 200 12ms\nPOST /api/auth 401\n";
        assert_eq!(strip_ansi(plain), plain);
    }

    #[test]
    fn test_strip_multiple_sequences() {
        let raw = "\x1b[1;32minfo\x1b[39m: server started on \x1b[36m3000\x1b[0m\n";
        assert_eq!(strip_ansi(raw), "info: server started on 3000\n");
    }

    #[test]
    fn test_unterminated_escape_is_kept() {
        assert_eq!(strip_ansi("ok \x1b[31"), "ok \x1b[31");
    }

    #[test]
    fn test_bundle_serializes_as_plain_strings() {
        let bundle = LogBundle {
            ec2: HostLogText("syslog line".to_string()),
            docker: ContainerLogText::from_raw("\x1b[32mready\x1b[0m"),
        };
        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value, serde_json::json!({"ec2": "syslog line", "docker": "ready"}));
    }
}
