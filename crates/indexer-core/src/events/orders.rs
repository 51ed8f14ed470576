use alloy_sol_types::sol;

sol! {
    /// Emitted when a swap order is scheduled
    #[derive(Debug)]
    event SwapOrderCreated(
        address indexed actor,
        bytes32 indexed identifier,
        address tokenIn,
        address tokenOut,
        uint256 amountIn,
        uint256 amountOutMin,
        uint256 startDelay,
        uint256 deadline
    );

    /// Emitted when a swap order is cancelled by its actor
    #[derive(Debug)]
    event SwapOrderCancelled(bytes32 indexed identifier);

    /// Emitted once a swap order has been filled
    #[derive(Debug)]
    event SwapOrderExecuted(bytes32 indexed identifier);

    /// Emitted when a limit order is placed
    #[derive(Debug)]
    event LimitOrderCreated(
        address indexed actor,
        bytes32 indexed identifier,
        address tokenIn,
        address tokenOut,
        uint256 amountIn,
        uint256 amountOutMin,
        uint256 startDelay,
        uint256 deadline
    );

    /// Emitted when a limit order is cancelled.
    /// The contract misspells this event name; the signature hash
    /// only matches with the typo kept.
    #[derive(Debug)]
    event LimitOrdeCancelled(bytes32 indexed identifier);

    /// Emitted once a limit order has been filled
    #[derive(Debug)]
    event LimitOrderExecuted(bytes32 indexed identifier);

    /// Emitted when a recurring DCA order is scheduled
    #[derive(Debug)]
    event DCAOrderCreated(
        address indexed actor,
        bytes32 indexed identifier,
        address tokenIn,
        address tokenOut,
        uint256 amountIn,
        uint256 startDelay,
        uint256 numOfOrders,
        uint8 iMinutes,
        uint8 iHours
    );

    /// Emitted when a DCA order is cancelled
    #[derive(Debug)]
    event DCAOrderCancelled(bytes32 indexed identifier);

    /// Emitted after each DCA tranche executes, reporting the
    /// remaining unspent input-token balance
    #[derive(Debug)]
    event DCAOrderExecuted(bytes32 indexed identifier, uint256 amountInBalance);

    /// Emitted when a recurring transfer order is scheduled
    #[derive(Debug)]
    event TransferOrderCreated(
        address indexed actor,
        bytes32 indexed identifier,
        address receiver,
        address tokenIn,
        uint256 amountIn,
        uint256 startDelay,
        uint256 numOfOrders,
        uint8 iMinutes,
        uint8 iHours
    );

    /// Emitted when a transfer order is cancelled
    #[derive(Debug)]
    event TransferOrderCancelled(bytes32 indexed identifier);

    /// Emitted after each transfer tranche executes
    #[derive(Debug)]
    event TransferOrderExecuted(bytes32 indexed identifier, uint256 amountInBalance);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolEvent;

    #[test]
    fn signatures_match_contract_abi() {
        assert_eq!(
            SwapOrderCreated::SIGNATURE,
            "SwapOrderCreated(address,bytes32,address,address,uint256,uint256,uint256,uint256)"
        );
        assert_eq!(SwapOrderCancelled::SIGNATURE, "SwapOrderCancelled(bytes32)");
        assert_eq!(LimitOrdeCancelled::SIGNATURE, "LimitOrdeCancelled(bytes32)");
        assert_eq!(
            DCAOrderCreated::SIGNATURE,
            "DCAOrderCreated(address,bytes32,address,address,uint256,uint256,uint256,uint8,uint8)"
        );
        assert_eq!(
            DCAOrderExecuted::SIGNATURE,
            "DCAOrderExecuted(bytes32,uint256)"
        );
        assert_eq!(
            TransferOrderCreated::SIGNATURE,
            "TransferOrderCreated(address,bytes32,address,address,uint256,uint256,uint256,uint8,uint8)"
        );
    }

    #[test]
    fn signature_hashes_are_distinct() {
        let hashes = [
            SwapOrderCreated::SIGNATURE_HASH,
            SwapOrderCancelled::SIGNATURE_HASH,
            SwapOrderExecuted::SIGNATURE_HASH,
            LimitOrderCreated::SIGNATURE_HASH,
            LimitOrdeCancelled::SIGNATURE_HASH,
            LimitOrderExecuted::SIGNATURE_HASH,
            DCAOrderCreated::SIGNATURE_HASH,
            DCAOrderCancelled::SIGNATURE_HASH,
            DCAOrderExecuted::SIGNATURE_HASH,
            TransferOrderCreated::SIGNATURE_HASH,
            TransferOrderCancelled::SIGNATURE_HASH,
            TransferOrderExecuted::SIGNATURE_HASH,
        ];
        for (i, a) in hashes.iter().enumerate() {
            for b in hashes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
