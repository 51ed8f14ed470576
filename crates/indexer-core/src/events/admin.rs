use alloy_sol_types::sol;

// Standard OpenZeppelin Pausable / AccessControl events re-emitted
// by the order contract.
sol! {
    #[derive(Debug)]
    event Paused(address account);

    #[derive(Debug)]
    event Unpaused(address account);

    #[derive(Debug)]
    event RoleGranted(bytes32 indexed role, address indexed account, address indexed sender);

    #[derive(Debug)]
    event RoleRevoked(bytes32 indexed role, address indexed account, address indexed sender);

    #[derive(Debug)]
    event RoleAdminChanged(
        bytes32 indexed role,
        bytes32 indexed previousAdminRole,
        bytes32 indexed newAdminRole
    );
}
