use crate::core::parallel::{build_pool, SlotBuffer};

#[test]
fn 모든_슬롯이_한번씩_기록됨_테스트() -> anyhow::Result<()> {
    let pool = build_pool(4)?;
    let mut buffer = SlotBuffer::new(1_000, f64::NAN);
    pool.install(|| buffer.fill(|index| index as f64 * 2.0));

    let values = buffer.into_inner();
    assert!(values.iter().all(|v| !v.is_nan()));
    for (index, value) in values.iter().enumerate() {
        assert_eq!(*value, index as f64 * 2.0);
    }
    Ok(())
}

#[test]
fn 실패하는_작업_오류_전파_테스트() {
    let mut buffer = SlotBuffer::new(64, 0usize);
    let result = buffer.try_fill(|index| {
        if index == 17 {
            anyhow::bail!("작업 {} 실패", index)
        }
        Ok(index)
    });
    assert!(result.is_err());
}

#[test]
fn 원소별_변환_테스트() {
    let mut buffer = SlotBuffer::from_values(vec![1.0, 2.0, 3.0]);
    buffer.map_in_place(|index, value| value * 10.0 + index as f64);
    assert_eq!(buffer.as_slice(), &[10.0, 21.0, 32.0]);
    assert_eq!(buffer.len(), 3);
    assert!(!buffer.is_empty());
}

#[test]
fn 작업자_수_테스트() -> anyhow::Result<()> {
    let pool = build_pool(3)?;
    assert_eq!(pool.current_num_threads(), 3);
    Ok(())
}
