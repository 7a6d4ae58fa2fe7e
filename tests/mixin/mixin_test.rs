use little_emitter::{impl_emitter, Emitter, EmitterConfig, Listener, Registry, Value};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

/// A pre-existing type that gains emitter capability through its registry field
struct Document {
    name: String,
    revision: u32,
    events: Registry<Document>,
}

impl Document {
    fn new(name: &str) -> Self {
        Document {
            name: name.to_string(),
            revision: 0,
            events: Registry::new(),
        }
    }
}

impl_emitter!(Document, events);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Key {
    Pressed,
    Released,
}

/// A host with its own event and argument types
struct Keyboard {
    pressed: Vec<char>,
    registry: Registry<Keyboard>,
}

impl_emitter!(Keyboard, registry, Key, char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixin_binds_host_as_context() {
        let names = Rc::new(RefCell::new(Vec::new()));
        let mut doc = Document::new("Object");

        let sink = names.clone();
        doc.on(
            "foo",
            Listener::new(move |host: &mut Document, _: &[Value]| {
                sink.borrow_mut().push(host.name.clone());
                Ok(())
            }),
        );

        assert!(doc.emit("foo", &[]).unwrap());
        assert_eq!(*names.borrow(), vec!["Object".to_string()]);
    }

    #[test]
    fn test_mixin_listener_can_mutate_host() {
        let mut doc = Document::new("draft");

        doc.on(
            "save",
            Listener::new(|host: &mut Document, args: &[Value]| {
                host.revision += args.len() as u32;
                Ok(())
            }),
        );

        doc.emit("save", &[json!("a"), json!("b")]).unwrap();
        doc.emit("save", &[json!("c")]).unwrap();

        assert_eq!(doc.revision, 3);
        assert_eq!(doc.name, "draft");
    }

    #[test]
    fn test_mixin_hosts_have_independent_registries() {
        let mut first = Document::new("first");
        let second = Document::new("second");

        first.on(
            "foo",
            Listener::new(|_: &mut Document, _: &[Value]| Ok(())),
        );

        assert_eq!(first.listener_count("foo"), 1);
        assert_eq!(second.listener_count("foo"), 0);
        assert!(second.all_listeners().is_empty());
    }

    #[test]
    fn test_mixin_with_custom_event_and_args() {
        let mut keyboard = Keyboard {
            pressed: Vec::new(),
            registry: Registry::with_config(EmitterConfig::named("keyboard")),
        };

        keyboard
            .on(
                Key::Pressed,
                Listener::new(|kb: &mut Keyboard, key: &char| {
                    kb.pressed.push(*key);
                    Ok(())
                }),
            )
            .once(
                Key::Released,
                Listener::new(|kb: &mut Keyboard, _: &char| {
                    kb.pressed.clear();
                    Ok(())
                }),
            );

        keyboard.emit(&Key::Pressed, &'a').unwrap();
        keyboard.emit(&Key::Pressed, &'b').unwrap();
        assert_eq!(keyboard.pressed, vec!['a', 'b']);

        assert!(keyboard.emit(&Key::Released, &'b').unwrap());
        assert!(keyboard.pressed.is_empty());
        assert!(!keyboard.emit(&Key::Released, &'c').unwrap());
        assert_eq!(keyboard.event_names(), vec![Key::Pressed]);
        assert_eq!(keyboard.registry().config().label(), "keyboard");
    }
}
