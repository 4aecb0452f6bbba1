use std::fs;
use std::path::Path;

use gobundle::escape::{escape_bytes, escape_file, BUFSIZE};
use tempfile::TempDir;

fn collect_fragments(path: &Path) -> String {
    escape_file(path)
        .unwrap()
        .map(|fragment| fragment.unwrap())
        .collect()
}

#[test]
fn test_plain_ascii_passes_through() {
    assert_eq!(escape_bytes(b"package main"), "package main");
}

#[test]
fn test_short_escapes() {
    assert_eq!(escape_bytes(b"a\nb"), "a\\nb");
    assert_eq!(escape_bytes(b"a\tb"), "a\\tb");
    assert_eq!(escape_bytes(b"a\rb"), "a\\rb");
    assert_eq!(escape_bytes(b"say \"hi\""), "say \\\"hi\\\"");
    assert_eq!(escape_bytes(b"c:\\temp"), "c:\\\\temp");
    assert_eq!(escape_bytes(&[0x07, 0x08, 0x0b, 0x0c]), "\\a\\b\\v\\f");
}

#[test]
fn test_nul_and_control_bytes() {
    assert_eq!(escape_bytes(&[0x00]), "\\x00");
    assert_eq!(escape_bytes(&[0x01, 0x1f, 0x7f]), "\\x01\\x1f\\x7f");
}

#[test]
fn test_printable_unicode_passes_through() {
    assert_eq!(escape_bytes("héllo wörld".as_bytes()), "héllo wörld");
    assert_eq!(escape_bytes("日本語".as_bytes()), "日本語");
}

#[test]
fn test_non_printable_unicode_is_escaped() {
    // non-breaking space and the line separator are whitespace, not printable
    assert_eq!(escape_bytes("\u{00a0}".as_bytes()), "\\u00a0");
    assert_eq!(escape_bytes("\u{2028}".as_bytes()), "\\u2028");
}

#[test]
fn test_invalid_utf8_becomes_byte_escapes() {
    assert_eq!(escape_bytes(&[0xff, 0xfe]), "\\xff\\xfe");
    assert_eq!(escape_bytes(&[b'a', 0xc3, b'b']), "a\\xc3b");
}

#[test]
fn test_empty_input() {
    assert_eq!(escape_bytes(b""), "");
}

#[test]
fn test_empty_file_yields_no_fragments() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.json");
    fs::write(&path, b"").unwrap();

    let fragments: Vec<_> = escape_file(&path).unwrap().collect();
    assert!(fragments.is_empty());
}

#[test]
fn test_file_fragments_match_whole_buffer_escape() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.txt");
    let content = b"line one\nline two\t\"quoted\"\x00\xff";
    fs::write(&path, content).unwrap();

    assert_eq!(collect_fragments(&path), escape_bytes(content));
}

#[test]
fn test_rune_split_across_chunk_boundary() {
    // 'é' is two bytes in UTF-8; place it so the first byte lands at the end
    // of the first read chunk and the second byte in the next chunk
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("split.txt");
    let mut content = vec![b'a'; BUFSIZE - 1];
    content.extend_from_slice("é".as_bytes());
    fs::write(&path, &content).unwrap();

    let escaped = collect_fragments(&path);
    assert_eq!(escaped, escape_bytes(&content));
    assert!(escaped.ends_with('é'), "split rune must not be byte-escaped");
}

#[test]
fn test_large_file_spans_multiple_chunks() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("large.txt");
    let content: Vec<u8> = b"0123456789\n".iter().cycle().take(3 * BUFSIZE + 17).copied().collect();
    fs::write(&path, &content).unwrap();

    let fragments: Vec<_> =
        escape_file(&path).unwrap().map(|f| f.unwrap()).collect();
    assert!(fragments.len() > 1);
    assert_eq!(fragments.concat(), escape_bytes(&content));
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(escape_file(Path::new("no/such/file.txt")).is_err());
}

#[test]
fn test_round_trip_through_go_literal_grammar() {
    // un-escape by the rules of the Go lexer and compare against the input
    fn unescape(s: &str) -> Vec<u8> {
        let mut out = Vec::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\\' {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                continue;
            }
            match chars.next().unwrap() {
                'n' => out.push(b'\n'),
                't' => out.push(b'\t'),
                'r' => out.push(b'\r'),
                'a' => out.push(0x07),
                'b' => out.push(0x08),
                'f' => out.push(0x0c),
                'v' => out.push(0x0b),
                '\\' => out.push(b'\\'),
                '"' => out.push(b'"'),
                'x' => {
                    let hex: String = (0..2).map(|_| chars.next().unwrap()).collect();
                    out.push(u8::from_str_radix(&hex, 16).unwrap());
                }
                'u' => {
                    let hex: String = (0..4).map(|_| chars.next().unwrap()).collect();
                    let c = char::from_u32(u32::from_str_radix(&hex, 16).unwrap()).unwrap();
                    let mut buf = [0u8; 4];
                    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
                'U' => {
                    let hex: String = (0..8).map(|_| chars.next().unwrap()).collect();
                    let c = char::from_u32(u32::from_str_radix(&hex, 16).unwrap()).unwrap();
                    let mut buf = [0u8; 4];
                    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
                other => panic!("unexpected escape: \\{}", other),
            }
        }
        out
    }

    let inputs: Vec<Vec<u8>> = vec![
        b"hello\nworld".to_vec(),
        b"\x00\x01\"\\\n".to_vec(),
        "unicode: \u{00e9}\u{1f600}\u{00a0}".as_bytes().to_vec(),
        vec![0xff, 0xc3, 0x28, b'a'],
        Vec::new(),
    ];
    for input in inputs {
        assert_eq!(unescape(&escape_bytes(&input)), input);
    }
}
