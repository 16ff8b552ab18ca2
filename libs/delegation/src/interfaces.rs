use alloy_sol_types::sol;

sol! {
    interface IUniversalInitializer {
        function initialize(bytes calldata args, bytes calldata signature) external payable;
    }

    error GuardedSelectorRejected(bytes4 selector);

    error InvalidSignature();

    error InvalidInitializeCall();
}
