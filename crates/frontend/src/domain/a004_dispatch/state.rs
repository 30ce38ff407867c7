//! Board bucketing for dispatches.

use contracts::domain::a004_dispatch::Dispatch;
use contracts::enums::DispatchStatus;

/// Partition dispatches into one bucket per status, in pipeline order.
/// Deserialization normalizes unknown statuses to the initial state, so
/// every record lands in exactly one bucket.
pub fn bucket(dispatches: &[Dispatch]) -> Vec<(DispatchStatus, Vec<Dispatch>)> {
    DispatchStatus::all()
        .into_iter()
        .map(|status| {
            let column: Vec<Dispatch> = dispatches
                .iter()
                .filter(|d| d.estado == status)
                .cloned()
                .collect();
            (status, column)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_order::OrderId;
    use contracts::domain::a004_dispatch::DispatchId;

    fn dispatch(id: i64, estado: DispatchStatus) -> Dispatch {
        Dispatch {
            id_despacho: DispatchId::new(id),
            id_orden: OrderId::new(id * 10),
            fecha_despacho: None,
            estado,
            direccion_entrega: String::new(),
        }
    }

    #[test]
    fn test_bucket_partitions_all_records() {
        let items = vec![
            dispatch(1, DispatchStatus::Pendiente),
            dispatch(2, DispatchStatus::Enviado),
            dispatch(3, DispatchStatus::Pendiente),
            dispatch(4, DispatchStatus::Entregado),
        ];

        let buckets = bucket(&items);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].0, DispatchStatus::Pendiente);
        assert_eq!(buckets[0].1.len(), 2);
        assert_eq!(buckets[1].1.len(), 1);
        assert_eq!(buckets[2].1.len(), 1);

        let total: usize = buckets.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_bucket_empty_input_keeps_columns() {
        let buckets = bucket(&[]);
        assert_eq!(buckets.len(), 3);
        assert!(buckets.iter().all(|(_, v)| v.is_empty()));
    }
}
