//! Counterpart resolution: finding a field by name, breadth first through
//! embedded records.

use rustc_hash::FxHashSet;

use crate::attributes::FieldDescriptor;
use crate::schema::{FieldPath, RecordSchema};

/// One record to search at the current depth
struct Frame {
    schema: &'static RecordSchema,
    prefix: FieldPath,
    settable: bool,
}

/// Find the field declared as `name` anywhere reachable from `schema`
///
/// All fields of one depth are compared before any embedded record is
/// entered; within a depth, records are searched in declaration order and
/// the first match wins. An embedded record type already searched at a
/// shallower depth is not entered again.
#[must_use]
pub fn find_field(schema: &'static RecordSchema, name: &str) -> Option<FieldDescriptor> {
    let mut visited = FxHashSet::default();
    visited.insert(schema.id());

    let mut level = vec![Frame {
        schema,
        prefix: FieldPath::new(),
        settable: true,
    }];

    while !level.is_empty() {
        for frame in &level {
            if let Some(index) = frame.schema.fields.iter().position(|f| f.name == name) {
                let field = &frame.schema.fields[index];
                let mut path = frame.prefix.clone();
                path.push(index);
                return Some(FieldDescriptor {
                    field,
                    path,
                    settable: frame.settable && field.is_settable(),
                });
            }
        }

        let mut next = Vec::new();
        for frame in &level {
            for (index, field) in frame.schema.fields.iter().enumerate() {
                let Some(embedded) = field.embedded_schema() else {
                    continue;
                };
                if !visited.insert(embedded.id()) {
                    continue;
                }
                let mut prefix = frame.prefix.clone();
                prefix.push(index);
                next.push(Frame {
                    schema: embedded,
                    prefix,
                    settable: frame.settable && field.public,
                });
            }
        }
        level = next;
    }

    None
}
