//! 响应式属性测试：快照发布用的 UnlockReactiveProperty 与落定事件用的队列。
//!
//! 测试项：
//! - 基础读写、watch 监听
//! - `wait_for` 条件等待（立即满足 / 异步等待）
//! - 队列 FIFO、关闭后发送失败

use std::time::Duration;

use crate::internal::states::queue_reactive::QueueReactiveProperty;
use crate::preload::PreloadSnapshot;
use crate::states::unlock_reactive::UnlockReactiveProperty;

// ═══════════════════════════ UnlockReactiveProperty ═══════════════════════════

#[tokio::test]
async fn unlock_basic_update_and_read() {
    let prop = UnlockReactiveProperty::new(0u64);
    prop.update(42).unwrap();
    assert_eq!(prop.get_current().unwrap(), 42);

    prop.update_field(|v| *v += 8).unwrap();
    assert_eq!(prop.get_current().unwrap(), 50);
    assert_eq!(prop.map(|v| v * 2), Some(100));
}

#[tokio::test]
async fn unlock_watch_receives_updates() {
    let prop = UnlockReactiveProperty::new(PreloadSnapshot::default());
    let mut watcher = prop.watch();

    prop.update_field(|s| s.progress = 0.5).unwrap();
    let v = watcher.changed().await.unwrap();
    assert_eq!(v.progress, 0.5);
    assert!(v.is_loading);

    prop.update_field(|s| {
        s.progress = 1.0;
        s.is_loading = false;
    })
    .unwrap();
    let v = watcher.changed().await.unwrap();
    assert_eq!(v.progress, 1.0);
    assert!(!v.is_loading);
}

#[tokio::test]
async fn wait_for_already_satisfied() {
    let prop = UnlockReactiveProperty::new(100i32);
    let mut watcher = prop.watch();
    // 当前值已满足，应立即返回
    let v = watcher.wait_for(|v| *v == 100).await.unwrap();
    assert_eq!(v, 100);
}

#[tokio::test(start_paused = true)]
async fn wait_for_async_satisfied() {
    let prop = UnlockReactiveProperty::new(0i32);
    let p = prop.clone();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        p.update(1).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        p.update(42).unwrap();
    });

    let mut watcher = prop.watch();
    let v = watcher.wait_for(|v| *v == 42).await.unwrap();
    assert_eq!(v, 42);
}

#[tokio::test(start_paused = true)]
async fn wait_for_blocks_when_unsatisfied() {
    let prop = UnlockReactiveProperty::new(0i32);
    let mut watcher = prop.watch();

    let result =
        tokio::time::timeout(Duration::from_millis(100), watcher.wait_for(|v| *v == 9999)).await;
    assert!(result.is_err(), "条件未满足时 wait_for 应持续挂起（超时）");
}

// ═══════════════════════════ QueueReactiveProperty ═══════════════════════════

#[tokio::test]
async fn queue_is_fifo_across_producers() {
    let (producer, mut consumer) = QueueReactiveProperty::<u32>::new();
    let second = producer.clone();

    producer.send(1).unwrap();
    second.send(2).unwrap();
    producer.send(3).unwrap();

    assert_eq!(consumer.recv().await, Some(1));
    assert_eq!(consumer.recv().await, Some(2));
    assert_eq!(consumer.recv().await, Some(3));
}

#[tokio::test]
async fn queue_send_fails_after_close() {
    let (producer, mut consumer) = QueueReactiveProperty::<u32>::new();
    producer.send(7).unwrap();
    consumer.close();

    // 已入队的消息仍可取出，新消息被拒绝
    assert_eq!(producer.send(8), Err(8));
    assert_eq!(consumer.recv().await, Some(7));
    assert_eq!(consumer.recv().await, None);
}
