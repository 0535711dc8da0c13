//! CSV row projection of a customer detail record.
//!
//! The output format is fixed: five `;`-delimited fields, free-text fields
//! (name, emails, phones) wrapped in quotes with embedded quotes doubled, id
//! and the ticket list left bare. Emails and phones join with `", "`, ticket
//! ids with `","`.

use deskex_api::CustomerDetail;

/// Header line of the output file.
pub const HEADER: &str = "ID;Name;Emails;Phone;TicketIDs";

/// Double every `"` in a free-text field. No other character is altered.
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\"\"")
}

/// Render one export line, without the trailing newline.
pub fn format_row(detail: &CustomerDetail) -> String {
    let emails = detail
        .emails
        .iter()
        .map(|e| escape_quotes(&e.email))
        .collect::<Vec<_>>()
        .join(", ");
    let phones = detail
        .phones
        .iter()
        .map(|p| escape_quotes(&p.phone))
        .collect::<Vec<_>>()
        .join(", ");
    let tickets = detail
        .tickets
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{};\"{}\";\"{}\";\"{}\";{}",
        detail.id,
        escape_quotes(&detail.name),
        emails,
        phones,
        tickets
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskex_api::{EmailEntry, PhoneEntry};

    fn detail(name: &str, emails: &[&str], phones: &[&str], tickets: &[i64]) -> CustomerDetail {
        CustomerDetail {
            id: 1,
            name: name.to_string(),
            tickets: tickets.to_vec(),
            emails: emails
                .iter()
                .map(|e| EmailEntry {
                    email: e.to_string(),
                })
                .collect(),
            phones: phones
                .iter()
                .map(|p| PhoneEntry {
                    phone: p.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn escape_doubles_quotes_and_nothing_else() {
        assert_eq!(escape_quotes(r#"A"B"#), r#"A""B"#);
        assert_eq!(escape_quotes(r#"""#), r#""""#);
        assert_eq!(escape_quotes("plain; text, unchanged"), "plain; text, unchanged");
        assert_eq!(escape_quotes(""), "");
    }

    #[test]
    fn row_field_order_and_quoting() {
        let detail = detail("Ada", &["a@x.com", "b@x.com"], &["+100"], &[10, 20]);
        assert_eq!(
            format_row(&detail),
            r#"1;"Ada";"a@x.com, b@x.com";"+100";10,20"#
        );
    }

    #[test]
    fn row_escapes_embedded_quotes_in_free_text_fields() {
        let detail = detail(r#"A"B"#, &[r#"a"@x.com"#], &[], &[]);
        assert_eq!(format_row(&detail), r#"1;"A""B";"a""@x.com";"";"#);
    }

    #[test]
    fn empty_collections_render_as_empty_fields() {
        let detail = detail("N", &[], &[], &[]);
        assert_eq!(format_row(&detail), r#"1;"N";"";"";"#);
    }
}
