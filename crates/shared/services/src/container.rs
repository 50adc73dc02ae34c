//! Service Container - Centralized service access.
//!
//! The gateway depends on the service traits only. `Services` bundles one
//! implementation of each, and a `ServiceProvider` builds that bundle from the
//! database handle once the connection manager reports it as live.

use std::sync::Arc;

use mongodb::Database;

use crate::{AddressService, CartService, CouponService, ProductService};

/// Service container trait for dependency injection.
///
/// Provides centralized access to all storefront services.
pub trait ServiceContainer: Send + Sync {
    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get address service
    fn addresses(&self) -> Arc<dyn AddressService>;

    /// Get cart service
    fn carts(&self) -> Arc<dyn CartService>;

    /// Get coupon service
    fn coupons(&self) -> Arc<dyn CouponService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    product_service: Arc<dyn ProductService>,
    address_service: Arc<dyn AddressService>,
    cart_service: Arc<dyn CartService>,
    coupon_service: Arc<dyn CouponService>,
}

impl Services {
    /// Create a new service container from already constructed services
    pub fn new(
        product_service: Arc<dyn ProductService>,
        address_service: Arc<dyn AddressService>,
        cart_service: Arc<dyn CartService>,
        coupon_service: Arc<dyn CouponService>,
    ) -> Self {
        Self {
            product_service,
            address_service,
            cart_service,
            coupon_service,
        }
    }
}

impl ServiceContainer for Services {
    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn addresses(&self) -> Arc<dyn AddressService> {
        self.address_service.clone()
    }

    fn carts(&self) -> Arc<dyn CartService> {
        self.cart_service.clone()
    }

    fn coupons(&self) -> Arc<dyn CouponService> {
        self.coupon_service.clone()
    }
}

/// Builds the service bundle from a connected database.
///
/// Called exactly once, after the startup ping succeeded.
pub trait ServiceProvider: Send + Sync {
    fn provide(&self, database: Database) -> Services;
}

impl<F> ServiceProvider for F
where
    F: Fn(Database) -> Services + Send + Sync,
{
    fn provide(&self, database: Database) -> Services {
        self(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockAddressService, MockCartService, MockCouponService, MockProductService};
    use chrono::Utc;
    use domain::ProductResponse;

    fn sample_product(id: &str) -> ProductResponse {
        ProductResponse {
            id: id.to_string(),
            name: "Pour-over kettle".to_string(),
            description: None,
            category: "coffee".to_string(),
            price: 42.0,
            stock: 7,
            images: vec![],
            is_available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn container_hands_out_the_same_instances() {
        let products: Arc<dyn ProductService> = Arc::new(MockProductService::new());
        let services = Services::new(
            products.clone(),
            Arc::new(MockAddressService::new()),
            Arc::new(MockCartService::new()),
            Arc::new(MockCouponService::new()),
        );

        assert!(Arc::ptr_eq(&services.products(), &products));
        assert!(Arc::ptr_eq(&services.products(), &services.clone().products()));
    }

    #[tokio::test]
    async fn container_delegates_to_the_injected_service() {
        let mut products = MockProductService::new();
        products
            .expect_get_product()
            .withf(|id| id == "p-1")
            .times(1)
            .returning(|id| Ok(sample_product(&id)));

        let services = Services::new(
            Arc::new(products),
            Arc::new(MockAddressService::new()),
            Arc::new(MockCartService::new()),
            Arc::new(MockCouponService::new()),
        );

        let product = services.products().get_product("p-1".to_string()).await.unwrap();
        assert_eq!(product.id, "p-1");
    }
}
