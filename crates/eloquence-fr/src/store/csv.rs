// Minimal CSV codec for vocabulary shards
//
// Comma-delimited, UTF-8, double-quote quoting. Fields containing a comma,
// a quote or a line break are quoted on write; embedded quotes are doubled.
// The parser accepts quoted fields spanning lines and both LF and CRLF
// record separators.

/// Parse CSV content into records. Blank lines yield no record.
pub(crate) fn parse(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_started = false;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }
        match c {
            '"' if field.is_empty() && !field_started => {
                in_quotes = true;
                field_started = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_started = false;
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                end_record(&mut records, &mut record, &mut field, &mut field_started);
            }
            '\n' => {
                end_record(&mut records, &mut record, &mut field, &mut field_started);
            }
            _ => {
                field.push(c);
                field_started = true;
            }
        }
    }
    end_record(&mut records, &mut record, &mut field, &mut field_started);

    records
}

fn end_record(
    records: &mut Vec<Vec<String>>,
    record: &mut Vec<String>,
    field: &mut String,
    field_started: &mut bool,
) {
    // A line with no separators and no content is a blank line, not a record.
    if record.is_empty() && field.is_empty() && !*field_started {
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
    *field_started = false;
}

/// Append one record to `out`, with a trailing LF.
pub(crate) fn write_record(out: &mut String, fields: &[&str]) {
    for (i, fieldtext) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, fieldtext);
    }
    out.push('\n');
}

fn write_field(out: &mut String, field: &str) {
    let needs_quoting = field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');
    if !needs_quoting {
        out.push_str(field);
        return;
    }
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_records() {
        let records = parse("a,b,c\nd,e,f\n");
        assert_eq!(records, [["a", "b", "c"], ["d", "e", "f"]]);
    }

    #[test]
    fn parses_without_trailing_newline() {
        let records = parse("a,b\nc,d");
        assert_eq!(records, [["a", "b"], ["c", "d"]]);
    }

    #[test]
    fn skips_blank_lines() {
        let records = parse("a,b\n\n\nc,d\n");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn parses_quoted_fields() {
        let records = parse("\"un, deux\",trois\n");
        assert_eq!(records, [["un, deux", "trois"]]);
    }

    #[test]
    fn parses_escaped_quotes() {
        let records = parse("\"dire \"\"non\"\"\",b\n");
        assert_eq!(records, [["dire \"non\"", "b"]]);
    }

    #[test]
    fn parses_crlf() {
        let records = parse("a,b\r\nc,d\r\n");
        assert_eq!(records, [["a", "b"], ["c", "d"]]);
    }

    #[test]
    fn parses_empty_fields() {
        let records = parse("a,,c\n");
        assert_eq!(records, [["a", "", "c"]]);
    }

    #[test]
    fn round_trip_with_quoting() {
        let mut out = String::new();
        write_record(&mut out, &["mot, phrase", "dire \"oui\"", "ligne\ncoup\u{00E9}e"]);
        let records = parse(&out);
        assert_eq!(
            records,
            [["mot, phrase", "dire \"oui\"", "ligne\ncoup\u{00E9}e"]]
        );
    }

    #[test]
    fn write_plain_record() {
        let mut out = String::new();
        write_record(&mut out, &["bon", "excellent", "raison"]);
        assert_eq!(out, "bon,excellent,raison\n");
    }
}
