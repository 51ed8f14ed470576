use alloy_primitives::{Address, B256};
use async_graphql::{Context, Error, Object, Result};
use indexer_store::MagentaStore;
use std::sync::Arc;

use super::types::{GqlAdminRecord, GqlDcaOrder, GqlLimitOrder, GqlSwapOrder, GqlTransferOrder};

/// Root query type
pub struct QueryRoot;

fn parse_actor(actor: &str) -> Result<Address> {
    actor
        .parse()
        .map_err(|_| Error::new("invalid actor address"))
}

fn parse_identifier(identifier: &str) -> Result<B256> {
    identifier
        .parse()
        .map_err(|_| Error::new("invalid order identifier"))
}

fn limit(first: i32) -> usize {
    first.max(0) as usize
}

#[Object]
impl QueryRoot {
    /// Swap orders created by an actor, newest first
    async fn swap_orders(
        &self,
        ctx: &Context<'_>,
        actor: String,
        #[graphql(default = 15)] first: i32,
    ) -> Result<Vec<GqlSwapOrder>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        let actor = parse_actor(&actor)?;
        Ok(store
            .swap_orders
            .recent_by_actor(&actor, limit(first))
            .into_iter()
            .map(GqlSwapOrder::from)
            .collect())
    }

    /// A swap order by identifier
    async fn swap_order(
        &self,
        ctx: &Context<'_>,
        identifier: String,
    ) -> Result<Option<GqlSwapOrder>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        let identifier = parse_identifier(&identifier)?;
        Ok(store.swap_orders.get(&identifier).map(GqlSwapOrder::from))
    }

    /// Limit orders created by an actor, newest first
    async fn limit_orders(
        &self,
        ctx: &Context<'_>,
        actor: String,
        #[graphql(default = 15)] first: i32,
    ) -> Result<Vec<GqlLimitOrder>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        let actor = parse_actor(&actor)?;
        Ok(store
            .limit_orders
            .recent_by_actor(&actor, limit(first))
            .into_iter()
            .map(GqlLimitOrder::from)
            .collect())
    }

    /// A limit order by identifier
    async fn limit_order(
        &self,
        ctx: &Context<'_>,
        identifier: String,
    ) -> Result<Option<GqlLimitOrder>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        let identifier = parse_identifier(&identifier)?;
        Ok(store.limit_orders.get(&identifier).map(GqlLimitOrder::from))
    }

    /// DCA orders created by an actor, newest first
    async fn dca_orders(
        &self,
        ctx: &Context<'_>,
        actor: String,
        #[graphql(default = 15)] first: i32,
    ) -> Result<Vec<GqlDcaOrder>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        let actor = parse_actor(&actor)?;
        Ok(store
            .dca_orders
            .recent_by_actor(&actor, limit(first))
            .into_iter()
            .map(GqlDcaOrder::from)
            .collect())
    }

    /// A DCA order by identifier
    async fn dca_order(
        &self,
        ctx: &Context<'_>,
        identifier: String,
    ) -> Result<Option<GqlDcaOrder>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        let identifier = parse_identifier(&identifier)?;
        Ok(store.dca_orders.get(&identifier).map(GqlDcaOrder::from))
    }

    /// Transfer orders created by an actor, newest first
    async fn transfer_orders(
        &self,
        ctx: &Context<'_>,
        actor: String,
        #[graphql(default = 15)] first: i32,
    ) -> Result<Vec<GqlTransferOrder>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        let actor = parse_actor(&actor)?;
        Ok(store
            .transfer_orders
            .recent_by_actor(&actor, limit(first))
            .into_iter()
            .map(GqlTransferOrder::from)
            .collect())
    }

    /// A transfer order by identifier
    async fn transfer_order(
        &self,
        ctx: &Context<'_>,
        identifier: String,
    ) -> Result<Option<GqlTransferOrder>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        let identifier = parse_identifier(&identifier)?;
        Ok(store
            .transfer_orders
            .get(&identifier)
            .map(GqlTransferOrder::from))
    }

    /// Recent administrative events (pause/unpause, role changes)
    async fn admin_log(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 50)] first: i32,
    ) -> Result<Vec<GqlAdminRecord>> {
        let store = ctx.data::<Arc<MagentaStore>>()?;
        Ok(store
            .admin_log
            .recent(limit(first))
            .into_iter()
            .map(GqlAdminRecord::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::schema::build_schema;
    use alloy_primitives::{Address, B256, U256};
    use indexer_core::types::{BlockMeta, SwapOrder};
    use indexer_store::MagentaStore;
    use std::sync::Arc;

    fn swap_order(identifier: B256, actor: Address, timestamp: u64, amount_in: u64) -> SwapOrder {
        SwapOrder {
            actor,
            identifier,
            token_in: Address::repeat_byte(0x11),
            token_out: Address::repeat_byte(0x22),
            amount_in: U256::from(amount_in),
            amount_out_min: U256::from(amount_in),
            start_delay: 0,
            deadline: 0,
            executed: false,
            cancelled: false,
            meta: BlockMeta {
                block_number: 1,
                block_timestamp: timestamp,
                transaction_hash: B256::repeat_byte(0xfe),
            },
        }
    }

    #[tokio::test]
    async fn swap_orders_filters_sorts_and_limits() {
        let store = Arc::new(MagentaStore::new());
        let actor = Address::repeat_byte(0x01);
        let other = Address::repeat_byte(0x02);

        store
            .swap_orders
            .insert(swap_order(B256::repeat_byte(0x01), actor, 100, 1000));
        store
            .swap_orders
            .insert(swap_order(B256::repeat_byte(0x02), actor, 300, 2000));
        store
            .swap_orders
            .insert(swap_order(B256::repeat_byte(0x03), actor, 200, 3000));
        store
            .swap_orders
            .insert(swap_order(B256::repeat_byte(0x04), other, 400, 4000));

        let schema = build_schema(store);
        let query = format!(
            r#"{{ swapOrders(actor: "{:?}", first: 2) {{ amountIn blockTimestamp cancelled }} }}"#,
            actor
        );

        let response = schema.execute(query.as_str()).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        let orders = data["swapOrders"].as_array().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0]["blockTimestamp"], 300);
        assert_eq!(orders[0]["amountIn"], "2000");
        assert_eq!(orders[1]["blockTimestamp"], 200);
    }

    #[tokio::test]
    async fn swap_order_lookup_by_identifier() {
        let store = Arc::new(MagentaStore::new());
        let id = B256::repeat_byte(0xaa);
        store
            .swap_orders
            .insert(swap_order(id, Address::repeat_byte(0x01), 100, 1000));

        let schema = build_schema(store);
        let query = format!(r#"{{ swapOrder(identifier: "{:?}") {{ id executed }} }}"#, id);

        let response = schema.execute(query.as_str()).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().unwrap();
        assert_eq!(data["swapOrder"]["executed"], false);

        let missing = format!(
            r#"{{ swapOrder(identifier: "{:?}") {{ id }} }}"#,
            B256::repeat_byte(0xbb)
        );
        let response = schema.execute(missing.as_str()).await;
        let data = response.data.into_json().unwrap();
        assert!(data["swapOrder"].is_null());
    }

    #[tokio::test]
    async fn invalid_actor_address_is_an_error() {
        let schema = build_schema(Arc::new(MagentaStore::new()));
        let response = schema
            .execute(r#"{ swapOrders(actor: "not-an-address") { id } }"#)
            .await;
        assert!(!response.errors.is_empty());
    }
}
