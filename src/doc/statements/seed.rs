/*!
# `SEED <number expression>`

## Purpose
Restart the random number generator.

## Remarks
The same seed always gives the same `rn` values.

## Example
```text
SEED 42
PRINT rn
```

*/
