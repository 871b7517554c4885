use std::io::{self, Write};

use bstr::{BString, ByteSlice};

use crate::list::ArrayList;

/// Placeholder printed for an unused slot
const EMPTY_SLOT: &[u8] = b"_";

fn slot_token(slot: &Option<BString>) -> &[u8] {
    slot.as_ref().map(|v| v.as_slice()).unwrap_or(EMPTY_SLOT)
}

/// Render a backing buffer as `[a b _ _]`
pub fn render_slots(slots: &[Option<BString>]) -> BString {
    let mut rendered = BString::from("[");
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            rendered.push(b' ');
        }
        rendered.extend_from_slice(slot_token(slot));
    }
    rendered.push(b']');
    rendered
}

/// Carets under each occupied slot of the line produced by `render_slots`
fn occupied_marks(slots: &[Option<BString>]) -> String {
    let mut marks = String::from(" ");
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            marks.push(' ');
        }
        let width = slot_token(slot).chars().count().max(1);
        let mark = if slot.is_some() { "^" } else { " " };
        marks.push_str(&mark.repeat(width));
    }
    marks.trim_end().to_string()
}

/// Debug output for one executed command
///
/// Format:
/// - the command record as read
/// - the backing buffer, empty slots shown as `_`
/// - carets under the live slots
/// - a `size=N capacity=C` summary
pub fn debug_step<W: Write>(
    writer: &mut W,
    record: &[u8],
    list: &ArrayList<BString>,
) -> io::Result<()> {
    writer.write_all(record)?;
    writeln!(writer)?;

    let slots = list.backing_array();
    writer.write_all(&render_slots(slots))?;
    writeln!(writer)?;

    let marks = occupied_marks(slots);
    if marks.is_empty() {
        writeln!(writer, "^ no live slots")?;
    } else {
        writeln!(writer, "{}", marks)?;
    }

    writeln!(writer, "size={} capacity={}", list.len(), list.capacity())
}
