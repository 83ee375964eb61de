//! # 작업자 풀과 슬롯 버퍼
//!
//! 호출 범위에서 만들어지는 결과 버퍼. 작업 단위 i는 슬롯 i에만 쓰며,
//! `par_iter_mut`가 슬롯을 서로 겹치지 않는 `&mut`로 나누므로 잠금이 필요 없다.

use anyhow::{anyhow, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// `threads`개 작업자를 가진 전용 rayon 풀
pub fn build_pool(threads: usize) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("gordeyev-worker-{}", i))
        .build()
        .map_err(|e| anyhow!("작업자 풀 생성 실패: {}", e))
}

/// 작업 단위 하나당 슬롯 하나를 갖는 버퍼
#[derive(Debug, Clone)]
pub struct SlotBuffer<T> {
    slots: Vec<T>,
}

impl<T: Copy + Send + Sync> SlotBuffer<T> {
    /// 모든 슬롯을 `sentinel`로 채운 버퍼
    pub fn new(len: usize, sentinel: T) -> Self {
        Self { slots: vec![sentinel; len] }
    }

    /// 이미 계산된 값으로 버퍼 생성
    pub fn from_values(slots: Vec<T>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// 각 슬롯 i에 `compute(i)`를 병렬로 기록
    ///
    /// 현재 rayon 풀(`ThreadPool::install` 안이면 그 풀)에서 실행된다.
    pub fn fill<F>(&mut self, compute: F)
    where
        F: Fn(usize) -> T + Sync,
    {
        self.slots
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, slot)| *slot = compute(index));
    }

    /// 실패할 수 있는 `fill`. 첫 오류를 반환한다.
    pub fn try_fill<F>(&mut self, compute: F) -> Result<()>
    where
        F: Fn(usize) -> Result<T> + Sync,
    {
        self.slots
            .par_iter_mut()
            .enumerate()
            .try_for_each(|(index, slot)| {
                *slot = compute(index)?;
                Ok(())
            })
    }

    /// 원소별 변환
    pub fn map_in_place<F>(&mut self, op: F)
    where
        F: Fn(usize, T) -> T + Sync,
    {
        self.slots
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, slot)| *slot = op(index, *slot));
    }

    pub fn into_inner(self) -> Vec<T> {
        self.slots
    }
}
