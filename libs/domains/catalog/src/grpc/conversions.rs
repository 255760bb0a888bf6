use crate::models::Product;

impl From<Product> for rpc::catalog::Product {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

impl From<rpc::catalog::Product> for Product {
    fn from(product: rpc::catalog::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

pub(super) fn products_response(products: Vec<Product>) -> rpc::catalog::ProductsResponse {
    rpc::catalog::ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }
}

pub(super) fn from_products_response(response: rpc::catalog::ProductsResponse) -> Vec<Product> {
    response.products.into_iter().map(Into::into).collect()
}
