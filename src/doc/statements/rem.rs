/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Example
```text
10 REM Authored by Zaphod
20 PRINT 42
RUN
42
```

*/
