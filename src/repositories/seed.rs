//! Datos de ejemplo de la consola
//!
//! Se cargan al arrancar cuando `SEED_SAMPLE_DATA` está activo. Los datos
//! pasan por el mismo formato JSON que la API, así que un error de formato
//! aquí aparece al iniciar y no en una pantalla.

use serde_json::json;

use crate::models::quote::Quote;
use crate::models::quote_request::QuoteRequest;
use crate::models::vehicle::Vehicle;

pub fn sample_vehicles() -> serde_json::Result<Vec<Vehicle>> {
    serde_json::from_value(json!([
        {
            "id": "1",
            "name": "Volkswagen Gol",
            "plate": "ABC-1234",
            "brand": "Volkswagen",
            "model": "Gol",
            "services": [{
                "order_ref": "AAA1A23",
                "vehicle": "Volkswagen Gol",
                "plate": "ABC-1234",
                "description": "Troca de óleo e filtros",
                "entry_date": "10/09/2023",
                "exit_date": "12/09/2023",
                "expected_delivery": "12/09/2023",
                "status": "completed",
                "priority": "low",
                "value": 150.0,
                "notes": "Cliente solicitou troca de óleo",
                "photos": []
            }]
        },
        {
            "id": "2",
            "name": "Fiat Uno",
            "plate": "XYZ-5678",
            "brand": "Fiat",
            "model": "Uno",
            "services": [{
                "order_ref": "BBB2B34",
                "vehicle": "Fiat Uno",
                "plate": "XYZ-5678",
                "description": "Revisão completa",
                "entry_date": "15/09/2023",
                "status": "in_progress",
                "priority": "medium",
                "value": 450.0,
                "notes": "Revisão dos 40.000 km",
                "photos": [
                    {
                        "id": "3",
                        "url": "/service-photos/xyz5678-antes-1.jpg",
                        "kind": "before",
                        "description": "Veículo antes da revisão",
                        "taken_at": "15/09/2023 09:15"
                    },
                    {
                        "id": "d4",
                        "url": "/service-photos/xyz5678-durante-1.jpg",
                        "kind": "during",
                        "description": "Troca de correia dentada",
                        "taken_at": "15/09/2023 14:20"
                    }
                ]
            }]
        },
        {
            "id": "3",
            "name": "Chevrolet Onix",
            "plate": "DEF-9012",
            "brand": "Chevrolet",
            "model": "Onix",
            "services": [{
                "order_ref": "CCC3C45",
                "vehicle": "Chevrolet Onix",
                "plate": "DEF-9012",
                "description": "Troca de pastilhas de freio",
                "entry_date": "20/09/2023",
                "status": "awaiting_parts",
                "priority": "high",
                "value": 320.0,
                "notes": "Pastilhas dianteiras e traseiras",
                "photos": [
                    {
                        "id": "DDD4D56",
                        "url": "/service-photos/def9012-antes-1.jpg",
                        "kind": "before",
                        "description": "Freios antes da troca",
                        "taken_at": "20/09/2023 10:00"
                    },
                    {
                        "id": "EEE5E67",
                        "url": "/service-photos/def9012-antes-2.jpg",
                        "kind": "before",
                        "description": "Disco de freio desgastado",
                        "taken_at": "20/09/2023 10:15"
                    }
                ]
            }]
        },
        {
            "id": "4",
            "name": "Hyundai HB20",
            "plate": "GHI-3456",
            "brand": "Hyundai",
            "model": "HB20",
            "services": [{
                "order_ref": "DDD4D56",
                "vehicle": "Hyundai HB20",
                "plate": "GHI-3456",
                "description": "Alinhamento e balanceamento",
                "entry_date": "22/09/2023",
                "status": "pending",
                "priority": "medium",
                "value": 80.0,
                "notes": "Cliente relatou vibração no volante",
                "photos": [{
                    "id": "7",
                    "url": "/service-photos/ghi3456-antes-1.jpg",
                    "kind": "before",
                    "description": "Pneus antes do alinhamento",
                    "taken_at": "22/09/2023 11:30"
                }]
            }]
        }
    ]))
}

pub fn sample_quotes() -> serde_json::Result<Vec<Quote>> {
    serde_json::from_value(json!([
        {
            "id": "1",
            "number": "ORC-2024-001",
            "customer": "João Silva",
            "phone": "(11) 99999-9999",
            "email": "joao.silva@email.com",
            "vehicle": "Volkswagen Gol 2020 - ABC-1234",
            "plate": "ABC-1234",
            "brand": "Volkswagen",
            "model": "Gol",
            "year": "2020",
            "notes": "Veículo com barulho na suspensão dianteira",
            "items": [
                { "id": "s1", "description": "Troca de óleo do motor", "quantity": 1, "unit_price": 45.0, "total": 45.0 },
                { "id": "s2", "description": "Filtro de óleo", "quantity": 1, "unit_price": 25.5, "total": 25.5 },
                { "id": "s3", "description": "Mão de obra - troca de óleo", "quantity": 1, "unit_price": 30.0, "total": 30.0 }
            ],
            "total": 100.5,
            "status": "pending",
            "created_at": "10/09/2024",
            "valid_until": "20/09/2024",
            "warranty_days": 90
        },
        {
            "id": "2",
            "number": "ORC-2024-002",
            "customer": "Maria Santos",
            "phone": "(11) 88888-8888",
            "email": "maria.santos@email.com",
            "vehicle": "Fiat Uno 2019 - XYZ-5678",
            "plate": "XYZ-5678",
            "brand": "Fiat",
            "model": "Uno",
            "year": "2019",
            "notes": "Revisão completa do veículo",
            "items": [
                { "id": "s4", "description": "Pastilhas de freio dianteiras", "quantity": 2, "unit_price": 120.0, "total": 240.0 },
                { "id": "s5", "description": "Discos de freio dianteiros", "quantity": 2, "unit_price": 180.0, "total": 360.0 },
                { "id": "s6", "description": "Mão de obra - troca de freios", "quantity": 1, "unit_price": 150.0, "total": 150.0 },
                { "id": "s7", "description": "Fluido de freio", "quantity": 1, "unit_price": 25.0, "total": 25.0 }
            ],
            "total": 775.0,
            "status": "approved",
            "created_at": "08/09/2024",
            "valid_until": "18/09/2024",
            "warranty_days": 180
        },
        {
            "id": "3",
            "number": "ORC-2024-003",
            "customer": "Pedro Costa",
            "phone": "(11) 77777-7777",
            "vehicle": "Chevrolet Onix 2021 - DEF-9012",
            "plate": "DEF-9012",
            "brand": "Chevrolet",
            "model": "Onix",
            "year": "2021",
            "notes": "Manutenção preventiva",
            "items": [
                { "id": "s8", "description": "Troca de filtro de ar", "quantity": 1, "unit_price": 35.0, "total": 35.0 },
                { "id": "s9", "description": "Troca de filtro de combustível", "quantity": 1, "unit_price": 45.0, "total": 45.0 },
                { "id": "s10", "description": "Mão de obra - troca de filtros", "quantity": 1, "unit_price": 40.0, "total": 40.0 }
            ],
            "total": 120.0,
            "status": "completed",
            "created_at": "05/09/2024",
            "warranty_days": 90
        }
    ]))
}

pub fn sample_quote_requests() -> serde_json::Result<Vec<QuoteRequest>> {
    serde_json::from_value(json!([
        {
            "id": "1",
            "number": "SOL-2024-001",
            "customer": "Carlos Eduardo",
            "phone": "(11) 99999-8888",
            "email": "carlos.eduardo@email.com",
            "address": "Rua das Flores, 123 - São Paulo/SP",
            "vehicle": "Honda Civic 2018",
            "plate": "HON-1234",
            "brand": "Honda",
            "model": "Civic",
            "year": "2018",
            "mileage": "85000",
            "service_type": "revision",
            "urgency": "medium",
            "problem_description": "Veículo com barulho estranho na suspensão dianteira e luz do painel acesa",
            "symptoms": "Barulho de batida quando passo em buracos, luz do ABS piscando",
            "desired_services": "Verificação completa da suspensão e sistema de freios",
            "notes": "Preferência para manhãs, veículo usado diariamente",
            "contact_preference": "whatsapp",
            "availability": "Segunda a sexta, 8h às 17h",
            "in_person_quote": true,
            "status": "pending",
            "created_at": "15/09/2024"
        },
        {
            "id": "2",
            "number": "SOL-2024-002",
            "customer": "Ana Maria Silva",
            "phone": "(11) 88888-7777",
            "email": "ana.silva@email.com",
            "vehicle": "Volkswagen Polo 2020",
            "plate": "POL-5678",
            "brand": "Volkswagen",
            "model": "Polo",
            "year": "2020",
            "mileage": "45000",
            "service_type": "maintenance",
            "urgency": "low",
            "problem_description": "Revisão periódica dos 45.000 km",
            "desired_services": "Troca de óleo, filtros e verificação geral",
            "contact_preference": "phone",
            "in_person_quote": false,
            "status": "quote_sent",
            "created_at": "12/09/2024",
            "reviewed_at": "13/09/2024"
        }
    ]))
}
