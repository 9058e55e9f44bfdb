//! # QueueReactiveProperty — 微队列
//!
//! 基于 tokio::sync::mpsc 的单向消息队列。预加载里每个探测任务都持有一个生产者，
//! 落定后把结果推进来；运行任务是唯一的消费者，也就是唯一修改进度状态的地方。
//!
//! ## 特性
//! - 无锁（mpsc::unbounded_channel）
//! - 严格 FIFO
//! - 多生产者（Clone sender），单消费者
//! - 仅库内部使用（`pub(crate)`）

use tokio::sync::mpsc;

/// 微队列生产者端，可 Clone。
#[derive(Clone, Debug)]
pub(crate) struct QueueReactiveProperty<T: Send + 'static> {
    sender: mpsc::UnboundedSender<T>,
}

/// 微队列消费者，不可 Clone。
#[derive(Debug)]
pub(crate) struct QueueReactiveConsumer<T: Send + 'static> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> QueueReactiveProperty<T>
where
    T: Send + 'static,
{
    /// 返回 (生产者, 消费者)。
    pub(crate) fn new() -> (Self, QueueReactiveConsumer<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, QueueReactiveConsumer { receiver })
    }

    /// 推送一条消息。消费者已关闭（运行被取消或已结束）时返回 `Err(T)`。
    pub(crate) fn send(&self, value: T) -> Result<(), T> {
        self.sender.send(value).map_err(|e| e.0)
    }
}

impl<T> QueueReactiveConsumer<T>
where
    T: Send + 'static,
{
    /// 异步接收下一条消息；所有生产者都已释放时返回 `None`。
    pub(crate) async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// 关闭队列：之后生产者的 send 都会失败，已入队的消息仍可取出。
    pub(crate) fn close(&mut self) {
        self.receiver.close();
    }
}
