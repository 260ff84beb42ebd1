//! Values produced by a successful evaluation.

/// One value of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched<L> {
    /// Text produced by a literal, character, flatten or replace primitive.
    Text(String),
    /// Values produced under a `label` primitive.
    Node {
        /// Label given to the node by the grammar.
        label: L,
        /// Values produced by the labeled expression, in input order.
        children: Vec<Matched<L>>,
    },
}

impl<L> Matched<L> {
    /// Return the text when the value is [`Matched::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Node { .. } => None,
        }
    }

    /// Return the label when the value is [`Matched::Node`].
    #[must_use]
    pub fn label(&self) -> Option<&L> {
        match self {
            Self::Text(_) => None,
            Self::Node { label, .. } => Some(label),
        }
    }

    /// Append every text below this value to `buffer`, depth first.
    pub(crate) fn collect_text(&self, buffer: &mut String) {
        match self {
            Self::Text(text) => buffer.push_str(text),
            Self::Node { children, .. } => {
                for child in children {
                    child.collect_text(buffer);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_nested_text_in_order() {
        let value = Matched::Node {
            label: 'n',
            children: vec![
                Matched::Text("a".into()),
                Matched::Node {
                    label: 'm',
                    children: vec![Matched::Text("b".into())],
                },
                Matched::Text("c".into()),
            ],
        };
        let mut buffer = String::new();
        value.collect_text(&mut buffer);
        assert_eq!(buffer, "abc");
        assert_eq!(value.label(), Some(&'n'));
        assert_eq!(value.as_text(), None);
    }
}
