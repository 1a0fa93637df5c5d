use crate::frame::DecodedFrame;

/// Receives every frame produced by the subject it is registered with.
pub trait FrameObserver {
    fn on_frame(&mut self, frame: &DecodedFrame);
}

/// Producer of decoded frames.
pub trait FrameSubject {
    fn register(&mut self, observer: Box<dyn FrameObserver>);
}

/// Holds observers and notifies them in registration order.
#[derive(Default)]
pub struct FrameBroadcaster {
    observers: Vec<Box<dyn FrameObserver>>,
}

impl FrameBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, frame: &DecodedFrame) {
        for observer in self.observers.iter_mut() {
            observer.on_frame(frame);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl FrameSubject for FrameBroadcaster {
    fn register(&mut self, observer: Box<dyn FrameObserver>) {
        self.observers.push(observer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Timestamp;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<(&'static str, u64)>>>,
    }

    impl FrameObserver for Recorder {
        fn on_frame(&mut self, frame: &DecodedFrame) {
            self.log.borrow_mut().push((self.name, frame.number));
        }
    }

    fn frame(number: u64) -> DecodedFrame {
        DecodedFrame {
            number,
            interface: Some("eth0".to_string()),
            length: 60,
            timestamp: Timestamp::default(),
            protocol_queue: vec![],
            layers: vec![],
            payload: vec![],
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut broadcaster = FrameBroadcaster::new();
        broadcaster.register(Box::new(Recorder {
            name: "first",
            log: Rc::clone(&log),
        }));
        broadcaster.register(Box::new(Recorder {
            name: "second",
            log: Rc::clone(&log),
        }));
        assert_eq!(broadcaster.len(), 2);

        broadcaster.notify(&frame(1));
        broadcaster.notify(&frame(2));

        assert_eq!(
            *log.borrow(),
            vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
        );
    }

    #[test]
    fn test_notify_without_observers() {
        let mut broadcaster = FrameBroadcaster::new();
        assert!(broadcaster.is_empty());
        broadcaster.notify(&frame(1));
    }
}
