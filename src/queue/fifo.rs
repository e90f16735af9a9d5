//! FIFO（先进先出）请求队列
//!
//! 严格按到达顺序服务：队列从不重排，也从不检查请求内容。

use std::collections::VecDeque;

use crate::net::RequestId;

#[derive(Debug, Default)]
pub struct FifoQueue {
    q: VecDeque<RequestId>,
}

impl FifoQueue {
    pub fn new() -> Self {
        Self { q: VecDeque::new() }
    }

    /// 入队：追加到队尾，保持 FIFO 顺序
    pub fn enqueue(&mut self, req: RequestId) {
        self.q.push_back(req);
    }

    /// 查看队首而不移除
    pub fn peek_head(&self) -> Option<RequestId> {
        self.q.front().copied()
    }

    /// 移除并返回队首
    pub fn dequeue_head(&mut self) -> Option<RequestId> {
        self.q.pop_front()
    }

    /// 当前队列长度，即该方向上的负载
    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }
}
