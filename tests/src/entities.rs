//! Entities shared by the integration tests.

use colmap::{properties, Entity, Path, Property};

/// An order, keyed by `Id`, with a business `Code` also unique per order.
#[derive(Debug)]
pub struct Order;

impl Order {
    pub const ID: Path<Order> = Path::new("Id");
    pub const CODE: Path<Order> = Path::new("Code");
    pub const CREATED_AT: Path<Order> = Path::new("CreatedAt");
}

impl Entity for Order {
    fn properties() -> Vec<Property> {
        let mut properties = properties!(Order {
            Id: i64,
            Code: String,
            CustomerId: i64,
            CreatedAt: String,
        });
        properties.push(Property::new::<Order, f64>("Total").read_only());
        properties
    }
}

#[derive(Debug)]
pub struct Customer;

impl Customer {
    pub const ID: Path<Customer> = Path::new("Id");
}

impl Entity for Customer {
    fn properties() -> Vec<Property> {
        let mut properties = properties!(Customer {
            Id: i64,
            Name: String,
            Email: String,
        });
        properties.push(Property::new::<Customer, String>("Région"));
        properties
    }
}
