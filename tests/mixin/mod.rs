mod mixin_test;
