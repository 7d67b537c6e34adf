//! Ctrl-C delivery for an interactive session

use tokio::sync::mpsc;

/// Stream of user interrupts, one item per Ctrl-C.
///
/// Created once per session. Once tokio owns SIGINT it keeps it for the
/// life of the process, so the watcher never goes away between rounds.
pub struct Interrupts {
    rx: mpsc::UnboundedReceiver<()>,
}

impl Interrupts {
    /// Forward every Ctrl-C until the receiver is dropped
    pub fn ctrl_c() -> Self {
        let (tx, interrupts) = Self::channel();
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                if tx.send(()).is_err() {
                    break;
                }
            }
        });
        interrupts
    }

    /// Interrupts fed by hand
    pub fn channel() -> (mpsc::UnboundedSender<()>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Next interrupt; `None` once no source is left
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Discard interrupts that arrived while nothing was running
    pub fn clear(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clear_drops_stale_interrupts() {
        let (tx, mut interrupts) = Interrupts::channel();
        tx.send(()).unwrap();
        tx.send(()).unwrap();
        interrupts.clear();

        drop(tx);
        assert_eq!(interrupts.recv().await, None);
    }
}
