//! Document-order traversal
//!
//! Follows the traversal Pandoc's JSON filters use: every tagged node that
//! sits inside an array is offered to the callback, and the node it returns
//! is then descended into. Tagged objects that are map values (metadata
//! entries) are descended into without being offered.

use serde_json::Value;

use crate::element::{Element, is_element};

/// Walk `value`, replacing each tagged array item with the callback's result
///
/// The callback runs once per node, before the node's children are visited.
/// A returned node is never offered to the callback again. The first error
/// stops the walk and leaves the remaining nodes unvisited.
pub fn walk<E, F>(value: &mut Value, action: &mut F) -> Result<(), E>
where
    F: FnMut(Element) -> Result<Element, E>,
{
    match value {
        Value::Array(items) => {
            for item in items.iter_mut() {
                if is_element(item) {
                    let element = Element::from_value(item.take());
                    *item = action(element)?.into_value();
                }
                walk(item, action)?;
            }
        }
        Value::Object(map) => {
            for child in map.values_mut() {
                walk(child, action)?;
            }
        }
        _ => {}
    }
    Ok(())
}
