//! Small HCL text helpers shared by every generator.

use crate::config::ProviderConfig;
use std::borrow::Cow;

/// Indentation unit for nested blocks.
pub const INDENT: &str = "  ";

/// Indentation for a given nesting depth.
pub fn pad(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Opening line of a resource block.
pub fn resource_open(kind: &str, name: &str) -> String {
    format!("resource \"{kind}\" \"{name}\" {{")
}

/// Escape text for use inside an HCL quoted string.
///
/// Line endings are normalized first (`\r\n` and stray `\r`), so multi-line
/// CLI text becomes a single literal with `\n` escapes. Template sequences
/// `${` and `%{` are doubled so they stay literal.
pub fn escape_string(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['\\', '"', '\n', '\r', '$', '%']) {
        return Cow::Borrowed(s);
    }

    let normalized = s.replace("\r\n", "\n").replace('\r', "");
    let mut out = String::with_capacity(normalized.len() + 8);
    let mut chars = normalized.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Quote and escape a string literal.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}

/// Object key: bare when it is a valid HCL identifier, quoted otherwise.
pub fn key(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    let bare = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(quote(name))
    }
}

/// `terraform` + `provider` preamble written at the top of the main file.
pub fn provider_header(provider: &ProviderConfig) -> String {
    format!(
        r#"
terraform {{
  required_providers {{
    sdwan = {{
      source = "{source}"
      version = "{version}"
    }}
  }}
}}

variable "MANAGER_ADDR" {{ type = string }}
variable "MANAGER_PASS" {{ type = string }}
variable "MANAGER_USER" {{ type = string }}

provider "sdwan" {{
  url      = var.MANAGER_ADDR
  username = var.MANAGER_USER
  password = var.MANAGER_PASS
}}
"#,
        source = provider.source,
        version = provider.version,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_is_borrowed() {
        assert!(matches!(escape_string("hello world"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_newlines() {
        assert_eq!(escape_string("line1\r\nline2\nline3"), "line1\\nline2\\nline3");
        assert_eq!(escape_string("a\rb"), "ab");
    }

    #[test]
    fn test_escape_quotes_and_backslash() {
        assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string(r"C:\path"), r"C:\\path");
    }

    #[test]
    fn test_escape_template_sequences() {
        assert_eq!(escape_string("cost ${x} and %{if}"), "cost $${x} and %%{if}");
        assert_eq!(escape_string("100% $5"), "100% $5");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("UTC"), "\"UTC\"");
    }

    #[test]
    fn test_key() {
        assert_eq!(key("host_name"), "host_name");
        assert_eq!(key("system-ip"), "system-ip");
        assert_eq!(key("_x1"), "_x1");
        assert_eq!(key("System IP"), "\"System IP\"");
        assert_eq!(key("vpn0/if_name"), "\"vpn0/if_name\"");
        assert_eq!(key("1st"), "\"1st\"");
        assert_eq!(key(""), "\"\"");
        assert_eq!(key("a\"b"), r#""a\"b""#);
    }

    #[test]
    fn test_resource_open() {
        assert_eq!(
            resource_open("sdwan_cisco_aaa_feature_template", "Global_AAA"),
            r#"resource "sdwan_cisco_aaa_feature_template" "Global_AAA" {"#
        );
    }

    #[test]
    fn test_provider_header() {
        let header = provider_header(&ProviderConfig::default());
        assert!(header.contains(r#"source = "CiscoDevNet/sdwan""#));
        assert!(header.contains("provider \"sdwan\" {"));
        assert!(header.contains("url      = var.MANAGER_ADDR"));
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad(0), "");
        assert_eq!(pad(2), "    ");
    }
}
