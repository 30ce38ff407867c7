//! Board bucketing for shipments.

use contracts::domain::a005_shipment::Shipment;
use contracts::enums::ShipmentStatus;

/// Partition shipments into one bucket per status, in pipeline order.
pub fn bucket(shipments: &[Shipment]) -> Vec<(ShipmentStatus, Vec<Shipment>)> {
    ShipmentStatus::all()
        .into_iter()
        .map(|status| {
            let column: Vec<Shipment> = shipments
                .iter()
                .filter(|s| s.estado == status)
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
    use contracts::domain::a005_shipment::ShipmentId;

    fn shipment(id: i64, estado: ShipmentStatus) -> Shipment {
        Shipment {
            id_envio: ShipmentId::new(id),
            id_despacho: DispatchId::new(id),
            id_orden: OrderId::new(id * 10),
            fecha_despacho: None,
            estado,
            direccion_entrega: String::new(),
            correo_usuario: String::new(),
            transportista: None,
            numero_guia: None,
        }
    }

    #[test]
    fn test_bucket_partitions_all_records() {
        let items = vec![
            shipment(1, ShipmentStatus::EnPreparacion),
            shipment(2, ShipmentStatus::EnTransito),
            shipment(3, ShipmentStatus::Entregado),
            shipment(4, ShipmentStatus::EnTransito),
        ];

        let buckets = bucket(&items);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].1.len(), 1);
        assert_eq!(buckets[1].1.len(), 2);
        assert_eq!(buckets[2].1.len(), 0);
        assert_eq!(buckets[3].1.len(), 1);

        let total: usize = buckets.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, items.len());
    }
}
