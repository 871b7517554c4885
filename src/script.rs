use bstr::{BString, ByteSlice};

/// One parsed script command
///
/// Indices stay signed here so a negative index reaches the list layer
/// and is reported as out of range rather than as a syntax error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    InsertAt { index: i64, value: Option<BString> },
    InsertFront(Option<BString>),
    InsertBack(Option<BString>),
    RemoveAt(i64),
    RemoveFront,
    RemoveBack,
    Get(i64),
    IsEmpty,
    Size,
    Capacity,
    Clear,
    Dump,
}

/// Whether a record carries no command (blank or `#` comment)
pub fn is_skippable(record: &[u8]) -> bool {
    let trimmed = record.trim_start();
    trimmed.is_empty() || trimmed.starts_with(b"#")
}

impl Command {
    /// Parse a record like `insert_at 2 foo`, `get 0` or `remove_back`
    ///
    /// Errors carry a message only; the caller attaches the record number.
    pub fn parse(record: &[u8]) -> Result<Self, String> {
        let mut tokens = record.fields();
        let name = tokens
            .next()
            .ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&[u8]> = tokens.collect();

        let command = match name {
            b"insert_at" => {
                expect_arity(name, &args, 1, 2)?;
                Command::InsertAt {
                    index: parse_index(args[0])?,
                    value: args.get(1).map(|v| BString::from(*v)),
                }
            }
            b"insert_front" => {
                expect_arity(name, &args, 0, 1)?;
                Command::InsertFront(args.first().map(|v| BString::from(*v)))
            }
            b"insert_back" => {
                expect_arity(name, &args, 0, 1)?;
                Command::InsertBack(args.first().map(|v| BString::from(*v)))
            }
            b"remove_at" => {
                expect_arity(name, &args, 1, 1)?;
                Command::RemoveAt(parse_index(args[0])?)
            }
            b"get" => {
                expect_arity(name, &args, 1, 1)?;
                Command::Get(parse_index(args[0])?)
            }
            _ => {
                let command = match name {
                    b"remove_front" => Command::RemoveFront,
                    b"remove_back" => Command::RemoveBack,
                    b"is_empty" => Command::IsEmpty,
                    b"size" => Command::Size,
                    b"capacity" => Command::Capacity,
                    b"clear" => Command::Clear,
                    b"dump" => Command::Dump,
                    _ => return Err(format!("unknown command: {}", name.as_bstr())),
                };
                expect_arity(name, &args, 0, 0)?;
                command
            }
        };

        Ok(command)
    }
}

fn expect_arity(name: &[u8], args: &[&[u8]], min: usize, max: usize) -> Result<(), String> {
    if args.len() < min || args.len() > max {
        let expected = if min == max {
            min.to_string()
        } else {
            format!("{} to {}", min, max)
        };
        return Err(format!(
            "{} takes {} argument(s), got {}",
            name.as_bstr(),
            expected,
            args.len()
        ));
    }
    Ok(())
}

fn parse_index(token: &[u8]) -> Result<i64, String> {
    token
        .to_str()
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| format!("invalid index: {}", token.as_bstr()))
}
