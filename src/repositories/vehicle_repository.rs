use uuid::Uuid;

use crate::models::service::{
    NewPhoto, NewService, Photo, Priority, Service, ServiceChanges, ServiceStatus,
};
use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::repositories::memory::{matches_term, Entity, InMemoryRepository};
use crate::services::statistics;
use crate::utils::dates::{BrDate, BrDateTime};
use crate::utils::numbering::{format_number, next_sequence, SERVICE_ORDER_PREFIX};

impl Entity for Vehicle {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.plate.as_str()];
        fields.extend(self.brand.as_deref());
        fields.extend(self.model.as_deref());
        fields.extend(self.year.as_deref());
        fields
    }
}

impl Entity for Service {
    fn id(&self) -> &str {
        &self.order_ref
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_ref.as_str(),
            self.vehicle.as_str(),
            self.plate.as_str(),
            self.description.as_str(),
        ]
    }
}

/// Repositorio de vehículos y de sus servicios embebidos
#[derive(Debug, Clone, Default)]
pub struct VehicleRepository {
    vehicles: InMemoryRepository<Vehicle>,
}

impl VehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: InMemoryRepository::from_items(vehicles),
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn list(&self) -> Vec<Vehicle> {
        self.vehicles.list()
    }

    pub fn as_slice(&self) -> &[Vehicle] {
        self.vehicles.as_slice()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Vehicle> {
        self.vehicles.get_by_id(id)
    }

    /// Registra un vehículo sin servicios
    pub fn create(&mut self, new_vehicle: NewVehicle) -> Vehicle {
        let sequence = next_sequence(self.vehicles.len());
        let id = sequence.to_string();
        if self.vehicles.contains_id(&id) {
            log::warn!(
                "⚠️ Id de vehículo '{}' ya existe (numeración por tamaño de colección)",
                id
            );
        }

        let vehicle = Vehicle {
            id,
            name: new_vehicle.display_name(),
            plate: new_vehicle.plate,
            brand: new_vehicle.brand,
            model: new_vehicle.model,
            year: new_vehicle.year,
            notes: new_vehicle.notes,
            services: Vec::new(),
        };

        log::info!("💾 Vehículo {} registrado ({})", vehicle.plate, vehicle.name);
        self.vehicles.push(vehicle)
    }

    /// Mezcla los campos informados. Nombre y placa se copian también a
    /// los servicios del vehículo.
    pub fn update(&mut self, id: &str, changes: VehicleChanges) -> Option<Vehicle> {
        let vehicle = self.vehicles.get_mut(id)?;

        if let Some(name) = changes.name {
            vehicle.name = name;
        }
        if let Some(plate) = changes.plate {
            vehicle.plate = plate;
        }
        if let Some(brand) = changes.brand {
            vehicle.brand = Some(brand);
        }
        if let Some(model) = changes.model {
            vehicle.model = Some(model);
        }
        if let Some(year) = changes.year {
            vehicle.year = Some(year);
        }
        if let Some(notes) = changes.notes {
            vehicle.notes = Some(notes);
        }

        let (name, plate) = (vehicle.name.clone(), vehicle.plate.clone());
        for service in vehicle.services.iter_mut() {
            service.vehicle = name.clone();
            service.plate = plate.clone();
        }

        log::info!("💾 Vehículo {} actualizado", vehicle.id);
        Some(vehicle.clone())
    }

    /// Elimina el vehículo junto con sus servicios
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.vehicles.delete(id);
        if removed {
            log::info!("🗑️ Vehículo {} eliminado", id);
        }
        removed
    }

    /// Busca en nombre, placa, marca, modelo y año
    pub fn search(&self, term: &str) -> Vec<Vehicle> {
        self.vehicles.search(term)
    }

    // --- Servicios ---

    /// Todos los servicios, por vehículo y luego por orden de alta
    pub fn services(&self) -> Vec<Service> {
        self.vehicles
            .as_slice()
            .iter()
            .flat_map(|v| v.services.iter().cloned())
            .collect()
    }

    pub fn service_count(&self) -> usize {
        self.vehicles.as_slice().iter().map(|v| v.services.len()).sum()
    }

    pub fn service_by_order(&self, order_ref: &str) -> Option<Service> {
        self.vehicles
            .as_slice()
            .iter()
            .flat_map(|v| v.services.iter())
            .find(|s| s.order_ref == order_ref)
            .cloned()
    }

    /// Servicios cuya placa contiene `plate` (sin distinguir mayúsculas)
    pub fn services_by_plate(&self, plate: &str) -> Vec<Service> {
        let plate = plate.to_lowercase();
        self.services()
            .into_iter()
            .filter(|s| s.plate.to_lowercase().contains(&plate))
            .collect()
    }

    /// Busca en orden, vehículo, placa y descripción
    pub fn search_services(&self, term: &str) -> Vec<Service> {
        let term = term.to_lowercase();
        self.services()
            .into_iter()
            .filter(|s| matches_term(s, &term))
            .collect()
    }

    pub fn services_by_status(&self, status: ServiceStatus) -> Vec<Service> {
        self.services()
            .into_iter()
            .filter(|s| s.status == status)
            .collect()
    }

    /// Más recientes por fecha de entrada
    pub fn recent_services(&self, limit: usize) -> Vec<Service> {
        statistics::recent_services(&self.services(), limit)
    }

    pub fn add_service(&mut self, vehicle_id: &str, new_service: NewService) -> Option<Service> {
        self.add_service_dated(vehicle_id, new_service, BrDate::today())
    }

    /// Abre una orden de servicio para el vehículo. `None` si el vehículo
    /// no existe.
    pub fn add_service_dated(
        &mut self,
        vehicle_id: &str,
        new_service: NewService,
        today: BrDate,
    ) -> Option<Service> {
        let sequence = next_sequence(self.service_count());
        let order_ref = format_number(SERVICE_ORDER_PREFIX, today.year(), sequence);
        if self.service_by_order(&order_ref).is_some() {
            log::warn!(
                "⚠️ Orden de servicio '{}' ya existe (numeración por tamaño de colección)",
                order_ref
            );
        }

        let vehicle = self.vehicles.get_mut(vehicle_id)?;
        let service = Service {
            order_ref,
            vehicle: vehicle.name.clone(),
            plate: vehicle.plate.clone(),
            description: new_service.description,
            entry_date: new_service.entry_date.unwrap_or(today),
            exit_date: None,
            expected_delivery: new_service.expected_delivery,
            status: new_service.status.unwrap_or(ServiceStatus::Pending),
            priority: new_service.priority.unwrap_or(Priority::Medium),
            value: new_service.value,
            notes: new_service.notes,
            photos: Vec::new(),
        };
        vehicle.services.push(service.clone());

        log::info!(
            "💾 Orden {} abierta para {} ({})",
            service.order_ref,
            service.plate,
            service.description
        );
        Some(service)
    }

    fn service_mut(&mut self, order_ref: &str) -> Option<&mut Service> {
        self.vehicles
            .iter_mut()
            .flat_map(|v| v.services.iter_mut())
            .find(|s| s.order_ref == order_ref)
    }

    pub fn update_service(&mut self, order_ref: &str, changes: ServiceChanges) -> Option<Service> {
        let service = self.service_mut(order_ref)?;

        if let Some(description) = changes.description {
            service.description = description;
        }
        if let Some(entry_date) = changes.entry_date {
            service.entry_date = entry_date;
        }
        if let Some(exit_date) = changes.exit_date {
            service.exit_date = Some(exit_date);
        }
        if let Some(expected_delivery) = changes.expected_delivery {
            service.expected_delivery = Some(expected_delivery);
        }
        if let Some(status) = changes.status {
            service.status = status;
        }
        if let Some(priority) = changes.priority {
            service.priority = priority;
        }
        if let Some(value) = changes.value {
            service.value = Some(value);
        }
        if let Some(notes) = changes.notes {
            service.notes = Some(notes);
        }

        log::info!("💾 Orden {} actualizada", service.order_ref);
        Some(service.clone())
    }

    pub fn remove_service(&mut self, order_ref: &str) -> bool {
        for vehicle in self.vehicles.iter_mut() {
            if let Some(index) = vehicle.services.iter().position(|s| s.order_ref == order_ref) {
                vehicle.services.remove(index);
                log::info!("🗑️ Orden {} eliminada", order_ref);
                return true;
            }
        }
        false
    }

    /// Adjunta una foto con id UUID v4; sin fecha explícita se usa ahora
    pub fn add_photo(&mut self, order_ref: &str, new_photo: NewPhoto) -> Option<Photo> {
        let service = self.service_mut(order_ref)?;
        let photo = Photo {
            id: Uuid::new_v4().to_string(),
            url: new_photo.url,
            kind: new_photo.kind,
            description: new_photo.description,
            taken_at: new_photo.taken_at.unwrap_or_else(BrDateTime::now),
        };
        service.photos.push(photo.clone());

        log::info!("📷 Foto {} agregada a la orden {}", photo.id, order_ref);
        Some(photo)
    }

    pub fn remove_photo(&mut self, order_ref: &str, photo_id: &str) -> bool {
        let Some(service) = self.service_mut(order_ref) else {
            return false;
        };
        match service.photos.iter().position(|p| p.id == photo_id) {
            Some(index) => {
                service.photos.remove(index);
                log::info!("🗑️ Foto {} eliminada de la orden {}", photo_id, order_ref);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service::PhotoKind;
    use rust_decimal::Decimal;

    fn day(d: u32, m: u32) -> BrDate {
        BrDate::from_dmy(d, m, 2024).unwrap()
    }

    fn new_vehicle(plate: &str, brand: &str, model: &str) -> NewVehicle {
        NewVehicle {
            plate: plate.to_string(),
            brand: Some(brand.to_string()),
            model: Some(model.to_string()),
            year: Some("2020".to_string()),
            ..Default::default()
        }
    }

    fn new_service(description: &str) -> NewService {
        NewService {
            description: description.to_string(),
            ..Default::default()
        }
    }

    fn repo_with_two_vehicles() -> VehicleRepository {
        let mut repo = VehicleRepository::new();
        repo.create(new_vehicle("ABC-1234", "Volkswagen", "Gol"));
        repo.create(new_vehicle("XYZ-5678", "Fiat", "Uno"));
        repo
    }

    #[test]
    fn test_create_vehicle_uses_brand_and_model_as_name() {
        let repo = repo_with_two_vehicles();
        let gol = repo.get_by_id("1").unwrap();
        assert_eq!(gol.name, "Volkswagen Gol");
        assert!(gol.services.is_empty());
        assert_eq!(repo.search("uno").len(), 1);
        assert_eq!(repo.search("2020").len(), 2);
    }

    #[test]
    fn test_add_service_numbers_across_vehicles() {
        let mut repo = repo_with_two_vehicles();
        let first = repo
            .add_service_dated("1", new_service("Troca de óleo"), day(10, 1))
            .unwrap();
        let second = repo
            .add_service_dated("2", new_service("Troca de correia"), day(12, 1))
            .unwrap();

        assert_eq!(first.order_ref, "OS-2024-001");
        assert_eq!(second.order_ref, "OS-2024-002");
        assert_eq!(second.vehicle, "Fiat Uno");
        assert_eq!(second.plate, "XYZ-5678");
        assert_eq!(second.status, ServiceStatus::Pending);
        assert_eq!(second.priority, Priority::Medium);
        assert_eq!(second.entry_date, day(12, 1));
        assert_eq!(repo.service_by_order("OS-2024-002"), Some(second));
    }

    #[test]
    fn test_add_service_to_missing_vehicle() {
        let mut repo = repo_with_two_vehicles();
        assert!(repo.add_service("99", new_service("Alinhamento")).is_none());
        assert_eq!(repo.service_count(), 0);
    }

    #[test]
    fn test_service_queries() {
        let mut repo = repo_with_two_vehicles();
        repo.add_service_dated("1", new_service("Troca de óleo"), day(10, 1));
        repo.add_service_dated("2", new_service("Revisão de freios"), day(15, 1));
        repo.add_service_dated("1", new_service("Alinhamento"), day(20, 1));
        repo.update_service(
            "OS-2024-002",
            ServiceChanges {
                status: Some(ServiceStatus::Completed),
                value: Some(Decimal::from(320)),
                ..Default::default()
            },
        );

        let all = repo.services();
        assert_eq!(all[0].order_ref, "OS-2024-001");
        assert_eq!(all[1].order_ref, "OS-2024-003");
        assert_eq!(repo.services_by_plate("abc").len(), 2);
        assert_eq!(repo.search_services("FREIOS").len(), 1);
        assert_eq!(repo.services_by_status(ServiceStatus::Completed).len(), 1);
        assert_eq!(repo.recent_services(1)[0].order_ref, "OS-2024-003");
    }

    #[test]
    fn test_vehicle_update_propagates_to_services() {
        let mut repo = repo_with_two_vehicles();
        repo.add_service("1", new_service("Troca de óleo"));
        repo.update(
            "1",
            VehicleChanges {
                plate: Some("ABC1D23".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(repo.services()[0].plate, "ABC1D23");
    }

    #[test]
    fn test_photos_and_service_removal() {
        let mut repo = repo_with_two_vehicles();
        let service = repo.add_service("1", new_service("Funilaria")).unwrap();
        let photo = repo
            .add_photo(
                &service.order_ref,
                NewPhoto {
                    url: "/images/servicos/amassado.jpg".to_string(),
                    kind: PhotoKind::Before,
                    description: "Porta amassada".to_string(),
                    taken_at: None,
                },
            )
            .unwrap();

        assert_eq!(photo.id.len(), 36);
        let stored = repo.service_by_order(&service.order_ref).unwrap();
        assert_eq!(stored.photo_count(PhotoKind::Before), 1);

        assert!(!repo.remove_photo(&service.order_ref, "nao-existe"));
        assert!(repo.remove_photo(&service.order_ref, &photo.id));
        assert!(repo.add_photo("OS-0000-000", NewPhoto {
            url: "/x.jpg".to_string(),
            kind: PhotoKind::After,
            description: String::new(),
            taken_at: None,
        })
        .is_none());

        assert!(repo.remove_service(&service.order_ref));
        assert!(!repo.remove_service(&service.order_ref));
        assert_eq!(repo.service_count(), 0);
    }
}
