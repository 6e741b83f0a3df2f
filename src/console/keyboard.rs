use crate::play::Command;
use crate::play::Input;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::channel;

/// stdin-backed command source. a reader thread parses the first character
/// of each line into a panel command and queues it; the control loop drains
/// the queue without blocking. the thread dies with stdin or with the
/// receiver, whichever goes first.
pub struct Keyboard {
    queue: Receiver<Command>,
}

impl Keyboard {
    pub fn listen() -> Self {
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            loop {
                let ref mut buffer = String::new();
                match std::io::stdin().read_line(buffer) {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {
                        if let Some(Ok(command)) = buffer.chars().next().map(Command::try_from) {
                            if tx.send(command).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });
        Self { queue: rx }
    }
}

impl Input for Keyboard {
    fn poll(&mut self) -> Option<Command> {
        self.queue.try_recv().ok()
    }
}
