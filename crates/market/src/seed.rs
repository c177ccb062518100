//! Sample marketplace data for demos and local development.

use terracredit_core::{Crop, CropType, NewFarmer};

/// The three demo farmers seeded by [`Marketplace::with_sample_data`].
///
/// [`Marketplace::with_sample_data`]: crate::Marketplace::with_sample_data
#[must_use]
pub fn sample_farmers() -> Vec<NewFarmer> {
    vec![
        NewFarmer {
            name: "John Kamau".to_string(),
            farm_size_hectares: 50.0,
            crops: vec![Crop::new(CropType::Corn, 30.0), Crop::new(CropType::Wheat, 20.0)],
            location: "Nakuru, Kenya".to_string(),
            email: "john.kamau@example.com".to_string(),
            phone: Some("+254 712 345 678".to_string()),
            image_url: None,
        },
        NewFarmer {
            name: "Sarah Wanjiru".to_string(),
            farm_size_hectares: 75.0,
            crops: vec![
                Crop::new(CropType::Coffee, 45.0),
                Crop::new(CropType::Vegetables, 30.0),
            ],
            location: "Kiambu, Kenya".to_string(),
            email: "sarah.wanjiru@example.com".to_string(),
            phone: Some("+254 723 456 789".to_string()),
            image_url: None,
        },
        NewFarmer {
            name: "David Omondi".to_string(),
            farm_size_hectares: 100.0,
            crops: vec![
                Crop::new(CropType::Sugarcane, 80.0),
                Crop::new(CropType::Rice, 20.0),
            ],
            location: "Kisumu, Kenya".to_string(),
            email: "david.omondi@example.com".to_string(),
            phone: Some("+254 734 567 890".to_string()),
            image_url: None,
        },
    ]
}
