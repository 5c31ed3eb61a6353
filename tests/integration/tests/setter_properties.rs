//! Integration tests for node value setters.
//!
//! Covers the setter contract end to end: kind preservation, rejection
//! without side effects, release accounting and auto-descent.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use mxnode_ast::{Destroyer, Node, NodeKind, NodeValue, UserData};
use mxnode_core::{GetValue, SetError, SetValue};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Counts destroyer invocations and records the `u32` payloads they received.
#[derive(Debug, Clone, Default)]
struct DestroyLog {
    calls: Rc<Cell<usize>>,
    seen: Rc<RefCell<Vec<u32>>>,
}

impl DestroyLog {
    fn new() -> Self {
        Self::default()
    }

    fn destroyer(&self) -> Destroyer {
        let calls = Rc::clone(&self.calls);
        let seen = Rc::clone(&self.seen);
        Destroyer::new(move |data| {
            calls.set(calls.get() + 1);
            if let Ok(value) = data.downcast::<u32>() {
                seen.borrow_mut().push(*value);
            }
        })
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }

    fn seen(&self) -> Vec<u32> {
        self.seen.borrow().clone()
    }
}

fn sample_nodes() -> Vec<Node> {
    vec![
        Node::new_element("e"),
        Node::new_cdata("c"),
        Node::new_integer(1),
        Node::new_opaque("o"),
        Node::new_real(1.0),
        Node::new_text(false, "t"),
        Node::new_custom(None, None),
        Node::new_ignore(" "),
    ]
}

mod matching_kind {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_value_replaced() {
        let mut node = Node::new_integer(1);
        node.set_integer(99).unwrap();
        assert_eq!(node.integer(), Some(99));
        assert_eq!(node.kind(), NodeKind::Integer);
    }

    #[test]
    fn opaque_value_replaced() {
        let mut node = Node::new_opaque("a");
        node.set_opaque("b").unwrap();
        assert_eq!(node.opaque(), Some("b"));
        assert_eq!(node.kind(), NodeKind::Opaque);
    }

    #[test]
    fn text_value_replaced() {
        let mut node = Node::new_text(true, "a");
        node.set_text(false, "b").unwrap();
        assert_eq!(node.text(), Some((false, "b")));
        assert_eq!(node.kind(), NodeKind::Text);
    }

    #[test]
    fn element_renamed() {
        let mut node = Node::new_element("a");
        node.set_element("b").unwrap();
        assert_eq!(node.element_name(), Some("b"));
        assert_eq!(node.kind(), NodeKind::Element);
    }

    #[test]
    fn custom_replaced() {
        let mut node = Node::new_custom(None, None);
        node.set_custom(Some(Box::new(5u32)), None).unwrap();
        assert_eq!(
            node.custom().and_then(|data| data.downcast_ref::<u32>()),
            Some(&5)
        );
        assert_eq!(node.kind(), NodeKind::Custom);
    }
}

mod mismatched_kind {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(node: &Node) -> serde_json::Value {
        serde_json::to_value(node).unwrap()
    }

    #[test]
    fn integer_setter_rejects_other_kinds() {
        for mut node in sample_nodes()
            .into_iter()
            .filter(|n| n.kind() != NodeKind::Integer)
        {
            let before = snapshot(&node);
            assert_eq!(node.set_integer(5), Err(SetError::Inapplicable));
            assert_eq!(snapshot(&node), before);
        }
    }

    #[test]
    fn opaque_setter_rejects_other_kinds() {
        for mut node in sample_nodes()
            .into_iter()
            .filter(|n| n.kind() != NodeKind::Opaque)
        {
            let before = snapshot(&node);
            assert_eq!(node.set_opaque("x"), Err(SetError::Inapplicable));
            assert_eq!(
                node.set_opaque_fmt(format_args!("{}", 1)),
                Err(SetError::Inapplicable)
            );
            assert_eq!(snapshot(&node), before);
        }
    }

    #[test]
    fn text_setter_rejects_other_kinds() {
        for mut node in sample_nodes()
            .into_iter()
            .filter(|n| n.kind() != NodeKind::Text)
        {
            let before = snapshot(&node);
            assert_eq!(node.set_text(true, "x"), Err(SetError::Inapplicable));
            assert_eq!(
                node.set_text_fmt(true, format_args!("{}", 1)),
                Err(SetError::Inapplicable)
            );
            assert_eq!(snapshot(&node), before);
        }
    }

    #[test]
    fn element_and_cdata_setters_reject_value_kinds() {
        for mut node in sample_nodes().into_iter().filter(|n| n.kind().is_value()) {
            let before = snapshot(&node);
            assert_eq!(node.set_element("x"), Err(SetError::Inapplicable));
            assert_eq!(node.set_cdata("x"), Err(SetError::Inapplicable));
            assert_eq!(snapshot(&node), before);
        }
    }

    #[test]
    fn custom_setter_rejects_other_kinds_without_running_destroyer() {
        let log = DestroyLog::new();
        for mut node in sample_nodes()
            .into_iter()
            .filter(|n| n.kind() != NodeKind::Custom)
        {
            let result = node.set_custom(Some(Box::new(1u32)), Some(log.destroyer()));
            assert_eq!(result, Err(SetError::Inapplicable));
        }
        assert_eq!(log.calls(), 0);
    }
}

mod release_accounting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_replacement_releases_previous_data_once() {
        let log = DestroyLog::new();
        let mut node = Node::new_custom(Some(Box::new(0u32)), Some(log.destroyer()));

        for i in 1..=5u32 {
            node.set_custom(Some(Box::new(i)), Some(log.destroyer()))
                .unwrap();
            assert_eq!(log.calls(), i as usize);
        }
        assert_eq!(log.seen(), vec![0, 1, 2, 3, 4]);

        drop(node);
        assert_eq!(log.calls(), 6);
        assert_eq!(log.seen(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn new_destroyer_only_stored() {
        let old = DestroyLog::new();
        let new = DestroyLog::new();
        let mut node = Node::new_custom(Some(Box::new(1u32)), Some(old.destroyer()));

        node.set_custom(Some(Box::new(2u32)), Some(new.destroyer()))
            .unwrap();

        assert_eq!(old.seen(), vec![1]);
        assert_eq!(new.calls(), 0);
    }

    #[rstest]
    #[case::missing_destroyer(true, false)]
    #[case::missing_data(false, true)]
    fn incomplete_pair_is_not_destroyed(#[case] with_data: bool, #[case] with_destroyer: bool) {
        let log = DestroyLog::new();
        let data = with_data.then(|| Box::new(1u32) as Box<dyn std::any::Any>);
        let destroyer = with_destroyer.then(|| log.destroyer());
        let mut node = Node::new_custom(data, destroyer);

        node.set_custom(Some(Box::new(2u32)), None).unwrap();
        assert_eq!(log.calls(), 0);

        drop(node);
        assert_eq!(log.calls(), 0);
    }

    #[test]
    fn dropping_tree_releases_nested_custom_data() {
        let log = DestroyLog::new();
        let tree = Node::new_element("root")
            .with_child(Node::new_custom(Some(Box::new(1u32)), Some(log.destroyer())))
            .with_child(
                Node::new_element("inner")
                    .with_child(Node::new_custom(Some(Box::new(2u32)), Some(log.destroyer()))),
            );

        drop(tree);
        assert_eq!(log.calls(), 2);
    }

    #[test]
    fn repeated_string_sets_keep_last_value() {
        let mut opaque = Node::new_opaque("");
        let mut text = Node::new_text(false, "");
        for i in 0..100 {
            opaque.set_opaque_fmt(format_args!("value {}", i)).unwrap();
            text.set_text_fmt(i % 2 == 0, format_args!("word{}", i))
                .unwrap();
        }

        assert_eq!(opaque.opaque(), Some("value 99"));
        assert_eq!(text.text(), Some((false, "word99")));
    }
}

mod auto_descend {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_setter_mutates_child_not_parent() {
        let mut node = Node::new_element("count").with_child(Node::new_integer(0));
        node.set_integer(17).unwrap();

        assert_eq!(node.kind(), NodeKind::Element);
        assert_eq!(node.element_name(), Some("count"));
        assert!(matches!(node.children[0].value, NodeValue::Integer(17)));
    }

    #[rstest]
    #[case::opaque(Node::new_opaque("old"))]
    #[case::text(Node::new_text(false, "old"))]
    fn string_setters_descend(#[case] child: Node) {
        let kind = child.kind();
        let mut node = Node::new_element("wrapper").with_child(child);

        match kind {
            NodeKind::Opaque => node.set_opaque("new").unwrap(),
            NodeKind::Text => node.set_text(true, "new").unwrap(),
            other => panic!("Unexpected kind {:?}", other),
        }

        let child = &node.children[0];
        assert_eq!(child.opaque().or(child.text().map(|(_, s)| s)), Some("new"));
    }

    #[test]
    fn custom_setter_descends_and_releases_child_data() {
        let log = DestroyLog::new();
        let mut node = Node::new_element("blob")
            .with_child(Node::new_custom(Some(Box::new(3u32)), Some(log.destroyer())));

        node.set_custom(Some(Box::new(4u32)), Some(log.destroyer()))
            .unwrap();

        assert_eq!(log.seen(), vec![3]);
        assert_eq!(
            node.children[0]
                .custom()
                .and_then(|data| data.downcast_ref::<u32>()),
            Some(&4)
        );
    }

    #[test]
    fn cdata_redirect_from_wrapper() {
        let mut node = Node::new_element("wrapper").with_child(Node::new_element("![CDATA[x]]"));
        node.set_cdata("hello").unwrap();

        assert_eq!(node.element_name(), Some("wrapper"));
        assert_eq!(node.children[0].element_name(), Some("![CDATA[hello]]"));
    }

    #[test]
    fn cdata_section_with_cdata_child_updates_itself() {
        let mut node = Node::new_cdata("outer").with_child(Node::new_cdata("inner"));
        node.set_cdata("new").unwrap();

        assert_eq!(node.element_name(), Some("![CDATA[new]]"));
        assert_eq!(node.children[0].element_name(), Some("![CDATA[inner]]"));
    }
}

mod formatted {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opaque_formatted_value() {
        let mut node = Node::new_opaque("");
        node.set_opaque_fmt(format_args!("{}-{}", 3, "ok")).unwrap();
        assert_eq!(node.opaque(), Some("3-ok"));
    }

    struct Unformattable;

    impl fmt::Display for Unformattable {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[rstest]
    #[case::opaque(Node::new_opaque("keep"), false)]
    #[case::text(Node::new_text(false, "keep"), true)]
    fn failing_display_is_rejected_without_change(#[case] node: Node, #[case] as_text: bool) {
        let mut node = node;
        let before = serde_json::to_value(&node).unwrap();

        let result = if as_text {
            node.set_text_fmt(true, format_args!("{}", Unformattable))
        } else {
            node.set_opaque_fmt(format_args!("{}", Unformattable))
        };

        assert_eq!(result, Err(SetError::Inapplicable));
        assert_eq!(serde_json::to_value(&node).unwrap(), before);
        if as_text {
            assert_eq!(node.text(), Some((false, "keep")));
        } else {
            assert_eq!(node.opaque(), Some("keep"));
        }
    }

    #[test]
    fn text_formatted_value_sets_flag() {
        let mut node = Node::new_text(false, "");
        node.set_text_fmt(true, format_args!("{:>4}", 7)).unwrap();
        assert_eq!(node.text(), Some((true, "   7")));
    }
}

mod user_data {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_on_every_kind() {
        let mut owner = String::from("caller owned");
        let data = UserData::from_mut(&mut owner);

        for mut node in sample_nodes() {
            assert_eq!(node.set_user_data(Some(data)), Ok(()));
            assert_eq!(node.user_data, Some(data));
        }
    }

    #[test]
    fn replacing_and_dropping_leaves_pointee_alive() {
        let mut first = vec![1u8, 2, 3];
        let mut second = vec![4u8];

        let mut node = Node::new_integer(1);
        node.set_user_data(Some(UserData::from_mut(&mut first)))
            .unwrap();
        node.set_user_data(Some(UserData::from_mut(&mut second)))
            .unwrap();
        drop(node);

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, vec![4]);
    }

    #[test]
    fn absent_node_rejected() {
        let mut absent: Option<&mut Node> = None;
        assert_eq!(absent.set_user_data(None), Err(SetError::Inapplicable));
    }

    #[test]
    fn clearing_user_data() {
        let mut owner = 0u64;
        let mut node = Node::new_element("e");
        node.set_user_data(Some(UserData::from_mut(&mut owner)))
            .unwrap();
        node.set_user_data(None).unwrap();
        assert!(node.user_data.is_none());
    }
}

mod absent_node {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_result_can_be_passed_directly() {
        let mut root = Node::new_element("root");
        assert_eq!(
            root.first_child_mut().set_integer(1),
            Err(SetError::Inapplicable)
        );

        root.append_child(Node::new_integer(0));
        root.first_child_mut().set_integer(1).unwrap();
        assert_eq!(root.first_child().integer(), Some(1));
    }
}
